pub mod park_service;
