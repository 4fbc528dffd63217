pub mod alert_card;
pub mod footer;
pub mod header;
pub mod reservation_form;
