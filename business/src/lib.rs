pub mod application {
    pub mod wishlist {
        pub mod add;
        pub mod clear;
        pub mod get_all;
        pub mod get_count;
        pub mod is_in_wishlist;
        pub mod move_to_cart;
        pub mod remove;
        pub mod session;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod store;
        pub mod use_cases {
            pub mod add;
            pub mod clear;
            pub mod get_all;
            pub mod get_count;
            pub mod is_in_wishlist;
            pub mod move_to_cart;
            pub mod remove;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
