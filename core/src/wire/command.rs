/// Inbound control command on the streaming socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
}

impl Command {
    /// Parse a raw text frame. The Spanish spellings used by the original
    /// dashboard client are accepted alongside the English ones. Unknown
    /// payloads yield `None` and are ignored by the session.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "start" | "iniciar" => Some(Self::Start),
            "stop" | "detener" => Some(Self::Stop),
            _ => None,
        }
    }
}
