pub mod client_builder;
