pub mod description_service;
