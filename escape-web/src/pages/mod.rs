pub mod alert_list;
pub mod not_found;
pub mod reservation;
