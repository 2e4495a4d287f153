pub mod category_service;
