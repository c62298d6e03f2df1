pub mod area_account;
