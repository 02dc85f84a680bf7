use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use atelier_config::AtelierConfig;
use atelier_contact::{ContactForm, ContactService};
use atelier_content::Catalog;
use atelier_motion::primitives::{
    HoverToggleSpec, RotateSpec, StaggerTextSpec, char_reveal_text, hover_enter, hover_leave,
    hover_toggle, infinite_rotate,
};
use atelier_motion::stage::Stage;
use atelier_motion::types::MotionProperty;
use atelier_router::{Orchestrator, Phase};
use atelier_scroll::position::ScrollToTop;
use atelier_scroll::reveal::RevealSpec;

const FRAME_MS: f32 = 16.7;

/// Headless stage for the scripted walkthrough: values land in maps and
/// interesting writes go to the log.
struct ConsoleStage {
    applied: HashMap<(String, MotionProperty), f64>,
    element_tops: HashMap<String, f64>,
    scroll_offset: f64,
    viewport_height: f64,
    reduced_motion: bool,
}

impl ConsoleStage {
    fn new(reduced_motion: bool) -> Self {
        Self {
            applied: HashMap::new(),
            element_tops: HashMap::new(),
            scroll_offset: 0.0,
            viewport_height: 900.0,
            reduced_motion,
        }
    }

    fn lay_out(&mut self, element: &str, top: f64) {
        self.element_tops.insert(element.to_string(), top);
    }

    fn user_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
        tracing::info!(offset, "user scrolled");
    }

    fn opacity(&self, element: &str) -> Option<f64> {
        self.applied
            .get(&(element.to_string(), MotionProperty::Opacity))
            .copied()
    }
}

impl Stage for ConsoleStage {
    fn is_attached(&self, _element: &str) -> bool {
        true
    }

    fn apply(&mut self, element: &str, property: MotionProperty, value: f64) {
        tracing::trace!(element, ?property, value, "apply");
        self.applied
            .insert((element.to_string(), property), value);
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn element_top(&self, element: &str) -> Option<f64> {
        self.element_tops.get(element).copied()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

fn run_frames(orchestrator: &mut Orchestrator, stage: &mut ConsoleStage, count: usize) {
    for _ in 0..count {
        orchestrator.update(stage, FRAME_MS);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AtelierConfig::load();
    tracing::info!(api_base = %config.contact.api_base, "configuration loaded");

    let catalog = Catalog::new();
    let mut stage = ConsoleStage::new(config.motion.reduced_motion);
    let mut orchestrator = Orchestrator::new(&mut stage);
    orchestrator.set_reveal_stagger(config.motion.reveal_stagger_ms);
    let mut back_to_top = ScrollToTop::new(config.motion.scroll_to_top_threshold);

    // --- Home: entrance, hero heading, decorative badge, reveals ---
    orchestrator.navigate(&mut stage, "/");
    stage.lay_out("home:testimonials", 1600.0);
    orchestrator.bind_reveal(&mut stage, "home:testimonials", RevealSpec::default());

    let hero = char_reveal_text(
        orchestrator.motions_mut(),
        &mut stage,
        "home:hero",
        "We Build Things",
        StaggerTextSpec::default(),
    );
    tracing::info!(fragments = hero.fragments.len(), "hero heading fragmented");

    let badge = infinite_rotate(
        orchestrator.motions_mut(),
        &mut stage,
        "home:badge",
        RotateSpec::default(),
    );

    run_frames(&mut orchestrator, &mut stage, 120); // past the entrance and hero
    tracing::info!(phase = ?orchestrator.phase(), "home settled");

    // Hover a service card and leave before the lift finishes.
    let card = hover_toggle(
        orchestrator.motions_mut(),
        &mut stage,
        "home:card:web",
        HoverToggleSpec::default(),
    );
    hover_enter(orchestrator.motions_mut(), card);
    run_frames(&mut orchestrator, &mut stage, 8);
    hover_leave(orchestrator.motions_mut(), card);
    run_frames(&mut orchestrator, &mut stage, 30);

    // Scroll down: the testimonials reveal, the back-to-top control shows.
    stage.user_scroll(1100.0);
    back_to_top.update(&stage);
    run_frames(&mut orchestrator, &mut stage, 80);
    tracing::info!(
        revealed = ?stage.opacity("home:testimonials"),
        back_to_top = back_to_top.is_visible(),
        "after scrolling down"
    );

    back_to_top.activate(orchestrator.scroll_mut(), &mut stage);
    run_frames(&mut orchestrator, &mut stage, 50);
    back_to_top.update(&stage);
    tracing::info!(offset = stage.scroll_offset(), "glided back to top");

    orchestrator.motions_mut().kill(badge);

    // --- Blog: content pulled from the catalog ---
    orchestrator.navigate(&mut stage, "/blog");
    run_frames(&mut orchestrator, &mut stage, 60);
    for post in catalog.posts() {
        tracing::info!(
            slug = %post.slug,
            read_minutes = post.read_time_minutes(),
            by = %post.author.name,
            "post listed"
        );
    }

    let slug = &catalog.posts()[0].slug;
    orchestrator.navigate(&mut stage, &format!("/blog/{slug}"));
    run_frames(&mut orchestrator, &mut stage, 60);
    assert_eq!(orchestrator.phase(), Phase::Settled);

    // --- Contact: local rejection, then a real submission attempt ---
    orchestrator.navigate(&mut stage, "/contact");
    run_frames(&mut orchestrator, &mut stage, 60);

    let mut contact = ContactService::new(&config.contact.api_base);
    contact.set_timeout(Duration::from_secs(2));

    let incomplete = ContactForm {
        name: "Dana".to_string(),
        ..ContactForm::default()
    };
    if let Err(errors) = contact.submit(&incomplete) {
        for error in &errors {
            tracing::warn!(param = %error.param, msg = %error.msg, "form rejected locally");
        }
    }

    let form = ContactForm {
        name: "Dana Reyes".to_string(),
        email: "dana@example.com".to_string(),
        subject: "Project inquiry".to_string(),
        message: "We would like a quote for a site rebuild.".to_string(),
    };
    match contact.submit(&form) {
        Ok(request_id) => {
            tracing::info!(request_id, "submission in flight");
            while contact.has_pending() {
                for result in contact.poll() {
                    tracing::info!(result.request_id, outcome = ?result.outcome, "submission finished");
                }
                std::thread::sleep(Duration::from_millis(50));
            }
        }
        Err(errors) => tracing::error!(?errors, "unexpected local rejection"),
    }

    orchestrator.begin_exit(&mut stage);
    run_frames(&mut orchestrator, &mut stage, 40);
    tracing::info!("walkthrough complete");
    Ok(())
}
