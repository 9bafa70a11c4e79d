// Greeting domain model

/// The party being greeted. Built per request; never stored or shared.
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
}
