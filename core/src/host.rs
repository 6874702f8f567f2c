use alloc::string::String;

/// Greeting name used when the host does not provide one.
pub const DEFAULT_DISPLAY_NAME: &str = "Player";

/// The chat application embedding the mini-app, if any.
///
/// Nothing in the round engine depends on this; it only feeds the launch handshake and the greeting.
pub trait HostPlatform {
    /// Tells the host the app has finished loading.
    fn ready(&mut self) {}

    /// Asks the host to give the app its full viewport.
    fn expand(&mut self) {}

    /// First name of the user as reported by the host.
    fn display_name(&self) -> Option<String> {
        None
    }
}

/// Standalone mode: no host present.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoHost;

impl HostPlatform for NoHost {}

/// Host name if it is present and not blank, else [`DEFAULT_DISPLAY_NAME`].
pub fn resolve_display_name(host: &impl HostPlatform) -> String {
    host.display_name()
        .map(|name| String::from(name.trim()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| String::from(DEFAULT_DISPLAY_NAME))
}
