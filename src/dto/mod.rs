pub mod quote_dto;
pub mod inquiry_dto;
