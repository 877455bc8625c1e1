pub mod backend {
    pub mod memory;
}
pub mod key_value {
    pub mod file;
    pub mod memory;
}
