// Hero color palettes keyed by time of day, with a dark-theme override.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    /// Local hour `0..=23` to its bucket; anything out of range counts as night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=19 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn palette(self) -> &'static HeroPalette {
        match self {
            Self::Morning => &MORNING,
            Self::Afternoon => &AFTERNOON,
            Self::Evening => &EVENING,
            Self::Night => &NIGHT,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct HeroPalette {
    pub shapes: [&'static str; 3],
    pub gradient: [&'static str; 2],
}

pub const PALETTE_PROPERTIES: [&str; 5] = [
    "--hero-shape-1",
    "--hero-shape-2",
    "--hero-shape-3",
    "--hero-gradient-a",
    "--hero-gradient-b",
];

impl HeroPalette {
    /// CSS custom property / value pairs to set on the root element.
    pub fn properties(&self) -> [(&'static str, &'static str); 5] {
        [
            (PALETTE_PROPERTIES[0], self.shapes[0]),
            (PALETTE_PROPERTIES[1], self.shapes[1]),
            (PALETTE_PROPERTIES[2], self.shapes[2]),
            (PALETTE_PROPERTIES[3], self.gradient[0]),
            (PALETTE_PROPERTIES[4], self.gradient[1]),
        ]
    }
}

pub const MORNING: HeroPalette = HeroPalette {
    shapes: [
        "rgba(255,200,120,0.95)",
        "rgba(124,211,255,0.88)",
        "rgba(124,58,237,0.85)",
    ],
    gradient: ["rgba(255,236,209,0.08)", "rgba(255,210,140,0.06)"],
};

pub const AFTERNOON: HeroPalette = HeroPalette {
    shapes: [
        "rgba(88,166,255,0.95)",
        "rgba(52,211,153,0.92)",
        "rgba(124,58,237,0.90)",
    ],
    gradient: ["rgba(52,144,220,0.08)", "rgba(88,166,255,0.06)"],
};

pub const EVENING: HeroPalette = HeroPalette {
    shapes: [
        "rgba(255,140,110,0.96)",
        "rgba(200,120,255,0.88)",
        "rgba(60,180,200,0.86)",
    ],
    gradient: ["rgba(255,220,200,0.08)", "rgba(180,120,220,0.06)"],
};

pub const NIGHT: HeroPalette = HeroPalette {
    shapes: [
        "rgba(50,100,200,0.95)",
        "rgba(40,140,120,0.92)",
        "rgba(90,40,140,0.90)",
    ],
    gradient: ["rgba(10,16,40,0.12)", "rgba(30,40,80,0.08)"],
};

// Dark theme override, independent of the hour
pub const DARK: HeroPalette = HeroPalette {
    shapes: [
        "rgba(80,140,220,0.95)",
        "rgba(40,180,140,0.92)",
        "rgba(120,80,200,0.88)",
    ],
    gradient: ["rgba(10,24,48,0.12)", "rgba(20,40,80,0.08)"],
};

#[inline]
pub fn is_dark_theme(theme: Option<&str>) -> bool {
    theme == Some("dark")
}

/// Palette for the current `data-theme` value and local hour.
pub fn palette_for(theme: Option<&str>, hour: u32) -> &'static HeroPalette {
    if is_dark_theme(theme) {
        &DARK
    } else {
        DayPeriod::from_hour(hour).palette()
    }
}
