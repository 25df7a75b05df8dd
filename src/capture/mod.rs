/// IQ capture intake
///
/// This module handles:
/// - Deciding which files may enter the workflow
/// - Reading captures picked in the native dialog or passed on the command line

pub mod picker;
pub mod validator;
