use ratatui::style::Color;

/// Runtime color theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foregrounds
    pub fg0: Color,
    pub fg1: Color,
    pub dim: Color,

    // Accents
    pub accent: Color,
    pub heading: Color,
    pub link: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Nightfall: a muted blue-slate palette
        Self {
            bg0: Color::Rgb(0x1a, 0x1d, 0x23),
            bg1: Color::Rgb(0x23, 0x27, 0x30),
            bg2: Color::Rgb(0x2e, 0x33, 0x40),
            fg0: Color::Rgb(0xd5, 0xd8, 0xdf),
            fg1: Color::Rgb(0xb8, 0xbc, 0xc6),
            dim: Color::Rgb(0x5c, 0x63, 0x70),
            accent: Color::Rgb(0x7a, 0xa2, 0xf7),
            heading: Color::Rgb(0xe0, 0xaf, 0x68),
            link: Color::Rgb(0x73, 0xda, 0xca),
            warning: Color::Rgb(0xe0, 0xaf, 0x68),
            error: Color::Rgb(0xf7, 0x76, 0x8e),
        }
    }
}
