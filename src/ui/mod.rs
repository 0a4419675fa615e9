/// User interface module
///
/// This module handles:
/// - Native open/save/message dialogs (dialogs.rs)
/// - The preview panel widget (preview.rs)
pub mod dialogs;
pub mod preview;
