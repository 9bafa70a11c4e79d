// API feature modules, one directory per endpoint group

pub mod greetings;
