pub mod a001_abdm_id;
pub mod a002_chat;
