pub mod gauge {
    pub mod state;
    pub mod types;
}
