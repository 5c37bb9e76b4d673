/// Severity band of a risk value
///
/// Ordered from least to most alarming; [`Band::Neutral`] is used for values
/// that could not be classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Band {
    Ok,
    Info,
    Warn,
    Danger,
    Severe,
    #[default]
    Neutral,
}

impl Band {
    pub const ALL: [Band; 6] = [
        Band::Ok,
        Band::Info,
        Band::Warn,
        Band::Danger,
        Band::Severe,
        Band::Neutral,
    ];

    /// Short marker for places where color is unavailable
    pub fn symbol(self) -> &'static str {
        match self {
            Band::Ok => "●",
            Band::Info => "◆",
            Band::Warn => "▲",
            Band::Danger => "■",
            Band::Severe => "✖",
            Band::Neutral => "○",
        }
    }
}
