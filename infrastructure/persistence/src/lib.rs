pub mod db;
pub mod wishlist {
    pub mod entity;
    pub mod file;
    pub mod memory;
    pub mod postgres;
}
