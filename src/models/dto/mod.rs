pub mod quiz_dto;
pub mod request;
