/// State management module
/// 
/// This module handles all application state, including:
/// - The interactive session: selection, preview, save flow (session.rs)
/// - Shared data structures (data.rs)
pub mod data;
pub mod session;
