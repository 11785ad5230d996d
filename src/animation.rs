//! Entrance animations and their scoped lifecycle
//!
//! Animations are described as from-state tweens: elements matching a
//! selector start at an offset or transparent state and settle into their
//! natural state. An [`Animator`] executes them inside a context scoped to a
//! root element, and [`AnimationScope`] owns that context for exactly as long
//! as the page is mounted.
//!
//! The static build uses [`ScriptAnimator`], which compiles the calls into an
//! inline GSAP script that runs once the page layout is committed.

use maud::{Markup, PreEscaped, html};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

/// Selector shared by the intro, tier sections and CTA banner.
pub const SECTION_SELECTOR: &str = ".partner-section";

/// Selector shared by all partner cards.
pub const CARD_SELECTOR: &str = ".partner-card";

/// Location of the GSAP runtime loaded by the generated page.
pub const GSAP_SRC: &str = "https://unpkg.com/gsap@3/dist/gsap.min.js";

/// Easing curves understood by the animation runtime
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    /// Strong deceleration
    Power3Out,
    /// Slight overshoot before settling, with the given overshoot amount
    BackOut(f64),
}

impl Ease {
    /// Runtime name of the curve, e.g. `back.out(1.2)`
    pub fn name(&self) -> String {
        match self {
            Ease::Power3Out => "power3.out".to_string(),
            Ease::BackOut(amount) => format!("back.out({})", amount),
        }
    }
}

/// Starting visual state of a from-tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FromState {
    /// Vertical offset in pixels
    pub y: f64,
    /// Starting opacity; None keeps the element's own opacity
    pub opacity: Option<f64>,
}

/// A from-state tween over all elements matching a selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub selector: &'static str,
    pub from: FromState,
    /// Seconds per element
    pub duration: f64,
    /// Seconds between consecutive elements
    pub stagger: f64,
    pub ease: Ease,
    /// Seconds before the first element starts
    pub delay: f64,
}

impl Tween {
    /// Tween variables in the shape `gsap.from` expects.
    pub fn vars(&self) -> Value {
        let mut vars = Map::new();
        vars.insert("y".into(), json!(self.from.y));
        if let Some(opacity) = self.from.opacity {
            vars.insert("opacity".into(), json!(opacity));
        }
        vars.insert("duration".into(), json!(self.duration));
        vars.insert("stagger".into(), json!(self.stagger));
        vars.insert("ease".into(), json!(self.ease.name()));
        if self.delay > 0.0 {
            vars.insert("delay".into(), json!(self.delay));
        }
        Value::Object(vars)
    }
}

/// The page's entrance sequence: sections slide in, then cards pop in.
///
/// The two tweens are timed independently; only their fixed stagger and
/// delay values order them.
pub fn entrance_sequence() -> [Tween; 2] {
    [
        Tween {
            selector: SECTION_SELECTOR,
            from: FromState {
                y: 30.0,
                opacity: Some(0.0),
            },
            duration: 0.8,
            stagger: 0.2,
            ease: Ease::Power3Out,
            delay: 0.0,
        },
        Tween {
            selector: CARD_SELECTOR,
            from: FromState {
                y: 20.0,
                opacity: None,
            },
            duration: 0.6,
            stagger: 0.1,
            ease: Ease::BackOut(1.2),
            delay: 0.4,
        },
    ]
}

/// Handle of an animation context created by an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextId(pub u32);

/// Executes tweens inside contexts that can be reverted as a whole.
pub trait Animator {
    /// Opens a context whose selectors resolve inside `scope`.
    fn create_context(&mut self, scope: &str) -> ContextId;

    /// Starts a from-state tween inside a context.
    fn from(&mut self, context: ContextId, tween: &Tween);

    /// Resets every property animated in the context and disposes it.
    fn revert(&mut self, context: ContextId);
}

/// Exclusive ownership of one animation context.
///
/// The context is created on acquisition and reverted exactly once when the
/// scope is dropped. Because the scope borrows the animator mutably, nothing
/// can reach the context after it has been reverted.
pub struct AnimationScope<'a, A: Animator + ?Sized> {
    animator: &'a mut A,
    context: ContextId,
}

impl<'a, A: Animator + ?Sized> AnimationScope<'a, A> {
    /// Creates a context scoped to `scope` and takes ownership of it.
    pub fn acquire(animator: &'a mut A, scope: &str) -> Self {
        let context = animator.create_context(scope);
        tracing::debug!(?context, scope, "Acquired animation context");
        Self { animator, context }
    }

    /// Starts a tween inside the owned context.
    pub fn from(&mut self, tween: &Tween) {
        self.animator.from(self.context, tween);
    }

    pub fn context(&self) -> ContextId {
        self.context
    }

    /// Reverts the context now instead of at end of scope.
    pub fn revert(self) {
        drop(self);
    }
}

impl<A: Animator + ?Sized> Drop for AnimationScope<'_, A> {
    fn drop(&mut self) {
        self.animator.revert(self.context);
        tracing::debug!(context = ?self.context, "Reverted animation context");
    }
}

/// Compiles animator calls into an inline GSAP script.
///
/// Each context becomes a `gsap.context` bound to its scope element; tweens
/// are added to it with `ctx.add`, and reverting registers `ctx.revert()` on
/// the page's `pagehide` event so the timeline is disposed with the page.
#[derive(Debug, Default)]
pub struct ScriptAnimator {
    next_id: u32,
    contexts: BTreeMap<ContextId, Vec<String>>,
}

impl ScriptAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lines(&mut self, context: ContextId) -> &mut Vec<String> {
        self.contexts.entry(context).or_default()
    }

    /// Assembled JavaScript source of every recorded context.
    pub fn source(&self) -> String {
        let mut js = String::new();
        for (id, lines) in &self.contexts {
            js.push_str("(() => {\n");
            js.push_str("  if (!window.gsap) return;\n");
            for line in lines {
                js.push_str("  ");
                js.push_str(line);
                js.push('\n');
            }
            js.push_str("})();\n");
            tracing::trace!(context = id.0, "Compiled animation context");
        }
        js
    }

    /// Script element carrying [`ScriptAnimator::source`], or nothing when no
    /// context was recorded.
    pub fn markup(&self) -> Markup {
        if self.contexts.is_empty() {
            return html! {};
        }
        html! { script { (PreEscaped(self.source())) } }
    }
}

impl Animator for ScriptAnimator {
    fn create_context(&mut self, scope: &str) -> ContextId {
        let id = ContextId(self.next_id);
        self.next_id += 1;

        let scope = Value::from(scope);
        let line = format!(
            "const ctx{n} = gsap.context(() => {{}}, document.querySelector({scope}));",
            n = id.0
        );
        self.lines(id).push(line);
        id
    }

    fn from(&mut self, context: ContextId, tween: &Tween) {
        let line = format!(
            "ctx{n}.add(() => gsap.from({selector}, {vars}));",
            n = context.0,
            selector = Value::from(tween.selector),
            vars = tween.vars()
        );
        self.lines(context).push(line);
    }

    fn revert(&mut self, context: ContextId) {
        let line = format!(
            "window.addEventListener(\"pagehide\", () => ctx{}.revert(), {{ once: true }});",
            context.0
        );
        self.lines(context).push(line);
    }
}
