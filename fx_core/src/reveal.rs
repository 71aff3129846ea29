//! Declarative reveal animations
//!
//! The wiring layer feeds these straight to the tween library; keeping them
//! as data means durations, offsets and trigger points stay testable.

use crate::easing::Ease;

/// Whether a step tweens to the given values or from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    To,
    From,
}

/// One entry of a sequenced timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStep {
    pub selector: &'static str,
    pub kind: StepKind,
    pub y: f32,
    pub opacity: Option<f32>,
    pub duration: f32,
    pub delay: f32,
    pub stagger: f32,
    pub ease: Option<Ease>,
    /// Position offset relative to the previous step, e.g. "-=0.8"
    pub offset: Option<&'static str>,
}

impl TimelineStep {
    fn to(selector: &'static str) -> Self {
        Self {
            selector,
            kind: StepKind::To,
            y: 0.0,
            opacity: None,
            duration: 1.0,
            delay: 0.0,
            stagger: 0.0,
            ease: None,
            offset: None,
        }
    }

    fn from(selector: &'static str) -> Self {
        Self {
            kind: StepKind::From,
            ..Self::to(selector)
        }
    }
}

/// A scroll-triggered reveal registration
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollReveal {
    pub target: &'static str,
    pub trigger: &'static str,
    /// Trigger point, e.g. "top 85%": element top crossing 85% of viewport height
    pub start: &'static str,
    pub y: f32,
    pub opacity: f32,
    pub duration: f32,
    pub stagger: f32,
    pub ease: Ease,
    /// Register one tween per matching element, each triggered by itself
    pub per_element: bool,
}

/// Hero entrance: lines rise in sequence, subtitle and status pill overlap
pub fn hero_steps() -> Vec<TimelineStep> {
    vec![
        TimelineStep {
            duration: 1.5,
            delay: 0.2,
            stagger: 0.15,
            ease: Some(Ease::Power4Out),
            ..TimelineStep::to(".line")
        },
        TimelineStep {
            y: 20.0,
            opacity: Some(0.0),
            offset: Some("-=0.8"),
            ..TimelineStep::from(".hero-sub")
        },
        TimelineStep {
            y: -20.0,
            opacity: Some(0.0),
            offset: Some("-=0.8"),
            ..TimelineStep::from(".status-pill")
        },
    ]
}

/// Error-page reveal: code fades in first, content follows with overlap
pub fn error_steps() -> Vec<TimelineStep> {
    vec![
        TimelineStep {
            opacity: Some(1.0),
            delay: 0.2,
            ease: Some(Ease::Power4Out),
            ..TimelineStep::to(".error-code")
        },
        TimelineStep {
            opacity: Some(1.0),
            ease: Some(Ease::Power4Out),
            offset: Some("-=0.5"),
            ..TimelineStep::to(".error-content")
        },
    ]
}

/// Generic fade-up for any element carrying the marker class
pub fn fade_up() -> ScrollReveal {
    ScrollReveal {
        target: ".fade-up",
        trigger: ".fade-up",
        start: "top 85%",
        y: 50.0,
        opacity: 0.0,
        duration: 1.0,
        stagger: 0.0,
        ease: Ease::Power3Out,
        per_element: true,
    }
}

/// Staggered reveal for the tech stack pills
pub fn tech_stack() -> ScrollReveal {
    ScrollReveal {
        target: ".tech-pill",
        trigger: ".tech-stack",
        start: "top 90%",
        y: 20.0,
        opacity: 0.0,
        duration: 0.5,
        stagger: 0.05,
        ease: Ease::BackOut,
        per_element: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_steps_sequence() {
        let steps = hero_steps();
        assert_eq!(steps.len(), 3);

        assert_eq!(steps[0].selector, ".line");
        assert_eq!(steps[0].kind, StepKind::To);
        assert_eq!(steps[0].stagger, 0.15);
        assert_eq!(steps[0].duration, 1.5);
        assert_eq!(steps[0].delay, 0.2);
        assert_eq!(steps[0].offset, None, "first step anchors the timeline");

        assert_eq!(steps[1].kind, StepKind::From);
        assert_eq!(steps[1].y, 20.0);
        assert_eq!(steps[1].offset, Some("-=0.8"));

        assert_eq!(steps[2].y, -20.0, "status pill drops in from above");
        assert_eq!(steps[2].offset, Some("-=0.8"));
    }

    #[test]
    fn test_error_steps_overlap() {
        let steps = error_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].selector, ".error-code");
        assert_eq!(steps[0].delay, 0.2);
        assert_eq!(steps[1].selector, ".error-content");
        assert_eq!(steps[1].offset, Some("-=0.5"));
        assert!(steps.iter().all(|s| s.kind == StepKind::To));
        assert!(steps.iter().all(|s| s.ease == Some(Ease::Power4Out)));
    }

    #[test]
    fn test_fade_up_registration() {
        let rule = fade_up();
        assert_eq!(rule.start, "top 85%");
        assert_eq!(rule.y, 50.0);
        assert!(rule.per_element, "each element triggers itself");
    }

    #[test]
    fn test_tech_stack_registration() {
        let rule = tech_stack();
        assert_eq!(rule.trigger, ".tech-stack");
        assert_eq!(rule.start, "top 90%");
        assert_eq!(rule.stagger, 0.05);
        assert_eq!(rule.ease, Ease::BackOut);
        assert!(!rule.per_element, "one grouped tween for the pills");
    }
}
