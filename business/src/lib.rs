pub mod application {
    pub mod account {
        pub mod get_profile;
        pub mod update_profile;
    }
    pub mod admin {
        pub mod create_product;
        pub mod dashboard;
        pub mod delete_product;
        pub mod list_orders;
        pub mod update_order_status;
        pub mod update_product;
    }
    pub mod catalog {
        pub mod product_detail;
        pub mod refresh;
    }
    pub mod checkout {
        pub mod place_order;
    }
}

pub mod domain {
    pub mod backend;
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
    }
    pub mod cart {
        pub mod model;
        pub mod store;
    }
    pub mod catalog {
        pub mod browse;
        pub mod errors;
        pub mod pagination;
        pub mod query;
        pub mod store;
        pub mod use_cases {
            pub mod product_detail;
            pub mod refresh;
        }
    }
    pub mod checkout {
        pub mod form;
        pub mod totals;
        pub mod use_cases {
            pub mod place_order;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
    }
    pub mod account {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod get_profile;
            pub mod update_profile;
        }
    }
    pub mod admin {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod create_product;
            pub mod dashboard;
            pub mod delete_product;
            pub mod list_orders;
            pub mod update_order_status;
            pub mod update_product;
        }
    }
}
