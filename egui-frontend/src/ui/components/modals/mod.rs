//! # Modals Module
//!
//! ## Module Organization:
//! - `transfer_modal` - Load screen confirmation (Submit/Cancel)
//! - `amount_modal` - Unload screen amount entry
//! - `alert_dialog` - Blocking single-button alert
//! - `modal_frame` - Backdrop and frame shared by every modal

pub mod alert_dialog;
pub mod amount_modal;
pub mod modal_frame;
pub mod transfer_modal;
