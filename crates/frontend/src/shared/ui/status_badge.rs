use contracts::domain::common::DocumentStatus;
use leptos::prelude::*;
use thaw::*;

/// Visual emphasis of a badge or banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Brand,
    Success,
    Warning,
    Danger,
    Informative,
    Subtle,
}

impl Tone {
    pub fn badge_color(self) -> BadgeColor {
        match self {
            Tone::Brand => BadgeColor::Brand,
            Tone::Success => BadgeColor::Success,
            Tone::Warning => BadgeColor::Warning,
            Tone::Danger => BadgeColor::Danger,
            Tone::Informative => BadgeColor::Informative,
            Tone::Subtle => BadgeColor::Subtle,
        }
    }

    /// BEM modifier, e.g. `banner--warning`
    pub fn modifier(self) -> &'static str {
        match self {
            Tone::Brand => "brand",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Informative => "info",
            Tone::Subtle => "subtle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeSpec {
    pub label: &'static str,
    pub tone: Tone,
}

impl BadgeSpec {
    pub const fn new(label: &'static str, tone: Tone) -> Self {
        Self { label, tone }
    }
}

/// Maps a document status to its badge tone
pub trait StatusTone: DocumentStatus {
    fn tone(&self) -> Tone;

    fn badge(&self) -> BadgeSpec {
        BadgeSpec::new(self.label(), self.tone())
    }
}

#[component]
pub fn StatusBadge(spec: BadgeSpec) -> impl IntoView {
    view! {
        <Badge
            appearance=BadgeAppearance::Tint
            color=spec.tone.badge_color()
            attr:data-tone=spec.tone.modifier()
        >
            {spec.label}
        </Badge>
    }
}
