pub mod category_client;
