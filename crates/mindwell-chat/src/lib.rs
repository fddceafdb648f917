//! mindwell-chat
//!
//! Rule-based replies for the support chat. Classifies a message into a
//! fixed intent, picks a vetted template for that intent and language, and
//! screens the template against the medical-advice deny-list before it is
//! returned. Never generates free text.

pub mod intent;
pub mod reply;
pub mod safety;
pub mod templates;
