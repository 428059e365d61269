//! Application state and composition.
//!
//! `RosterApp` owns the roster and the toolbar state, runs the view pipeline
//! and hands card snapshots to the renderer. Every mutating operation repaints
//! on success; rejections are reported through the renderer's status slots.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use clubroster_domain::common::eq_ignore_case;
use clubroster_domain::{
    ClubId, DomainError, EventId, MemberId, NewEvent, Roster, RsvpOutcome, SortKey, ViewPipeline,
    ViewState,
};

use crate::debounce::{debounce, Debouncer};
use crate::infrastructure::ports::{ClockPort, RenderPort};
use crate::view_model::{
    club_form_message, event_form_message, member_form_message, ClubCard, EVENT_ADDED,
    MEMBER_ADDED,
};

struct AppState {
    roster: Roster,
    view: ViewState,
}

/// State shared with the debounced search callback.
struct Shared {
    state: Mutex<AppState>,
    renderer: Arc<dyn RenderPort>,
    clock: Arc<dyn ClockPort>,
    pipeline: ViewPipeline,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn paint(&self) {
        let today = self.clock.now().date_naive();
        let cards: Vec<ClubCard> = {
            let state = self.lock();
            self.pipeline
                .run(&state.roster, &state.view)
                .into_iter()
                .map(|club| ClubCard::from_club(club, today))
                .collect()
        };
        tracing::debug!(visible = cards.len(), "Repainting club list");
        self.renderer.render(&cards);
    }
}

/// Main application state.
///
/// Search text goes through a debouncer; every other operation applies
/// immediately.
pub struct RosterApp {
    shared: Arc<Shared>,
    search: Debouncer<String>,
}

impl RosterApp {
    /// Must be created inside a Tokio runtime if `set_search_text` will be used.
    pub fn new(
        roster: Roster,
        search_debounce: Duration,
        renderer: Arc<dyn RenderPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let shared = Arc::new(Shared {
            state: Mutex::new(AppState {
                roster,
                view: ViewState::default(),
            }),
            renderer,
            clock,
            pipeline: ViewPipeline::standard(),
        });

        let on_search = Arc::clone(&shared);
        let search = debounce(
            move |text: String| {
                tracing::debug!(search = %text, "Applying search");
                on_search.lock().view.search_text = text;
                on_search.paint();
            },
            search_debounce,
        );

        Self { shared, search }
    }

    /// Recompute the visible clubs and hand them to the renderer.
    pub fn paint(&self) {
        self.shared.paint();
    }

    // =========================================================================
    // Clubs
    // =========================================================================

    /// Create a club. Clears the create-club form error on success.
    pub fn add_club(&self, name: &str, capacity: u32) -> Result<ClubId, DomainError> {
        let result = {
            let mut state = self.shared.lock();
            state.roster.add(name, capacity).map(|club| club.id().clone())
        };

        match result {
            Ok(id) => {
                tracing::info!(club_id = %id, name = name.trim(), capacity, "Club created");
                self.shared.renderer.set_form_error("");
                self.paint();
                Ok(id)
            }
            Err(err) => {
                tracing::warn!(error = %err, name, capacity, "Club rejected");
                self.shared.renderer.set_form_error(club_form_message(&err));
                Err(err)
            }
        }
    }

    // =========================================================================
    // Members
    // =========================================================================

    pub fn add_member(&self, club_id: &ClubId, name: &str) -> Result<MemberId, DomainError> {
        let result = {
            let mut state = self.shared.lock();
            match state.roster.find_by_id_mut(club_id) {
                Some(club) => club.add_member(name).map(|member| member.id().clone()),
                None => Err(DomainError::not_found("Club", club_id.as_str())),
            }
        };

        match result {
            Ok(member_id) => {
                tracing::info!(%club_id, %member_id, "Member added");
                self.paint();
                self.shared.renderer.set_status(club_id, MEMBER_ADDED);
                Ok(member_id)
            }
            Err(err) => {
                tracing::warn!(error = %err, %club_id, "Member rejected");
                self.shared
                    .renderer
                    .set_status(club_id, member_form_message(&err));
                Err(err)
            }
        }
    }

    /// Returns false if the club or member does not exist.
    pub fn remove_member(&self, club_id: &ClubId, member_id: &MemberId) -> bool {
        let removed = {
            let mut state = self.shared.lock();
            state
                .roster
                .find_by_id_mut(club_id)
                .is_some_and(|club| club.remove_member(member_id))
        };
        if removed {
            self.paint();
        }
        removed
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Schedule an event. A blank title is rejected before the club sees it.
    pub fn add_event(&self, club_id: &ClubId, new: NewEvent) -> Result<EventId, DomainError> {
        let result = if new.title.trim().is_empty() {
            Err(DomainError::invalid_name("Event title cannot be empty"))
        } else {
            let mut state = self.shared.lock();
            match state.roster.find_by_id_mut(club_id) {
                Some(club) => club.add_event(new).map(|event| event.id().clone()),
                None => Err(DomainError::not_found("Club", club_id.as_str())),
            }
        };

        match result {
            Ok(event_id) => {
                tracing::info!(%club_id, %event_id, "Event added");
                self.paint();
                self.shared.renderer.set_status(club_id, EVENT_ADDED);
                Ok(event_id)
            }
            Err(err) => {
                tracing::warn!(error = %err, %club_id, "Event rejected");
                self.shared
                    .renderer
                    .set_status(club_id, event_form_message(&err));
                Err(err)
            }
        }
    }

    /// Returns false if the club or event does not exist.
    pub fn remove_event(&self, club_id: &ClubId, event_id: &EventId) -> bool {
        let removed = {
            let mut state = self.shared.lock();
            state
                .roster
                .find_by_id_mut(club_id)
                .is_some_and(|club| club.remove_event(event_id))
        };
        if removed {
            self.paint();
        }
        removed
    }

    /// Toggle an RSVP. Repaints only when attendance changed; `None` if the
    /// club or event does not exist.
    pub fn toggle_rsvp(
        &self,
        club_id: &ClubId,
        event_id: &EventId,
        member_id: &MemberId,
    ) -> Option<RsvpOutcome> {
        let outcome = {
            let mut state = self.shared.lock();
            state
                .roster
                .find_by_id_mut(club_id)
                .and_then(|club| club.toggle_rsvp(event_id, member_id))
        };

        match outcome {
            Some(RsvpOutcome::Added | RsvpOutcome::Removed) => self.paint(),
            Some(other) => tracing::debug!(?other, %event_id, %member_id, "RSVP unchanged"),
            None => tracing::warn!(%club_id, %event_id, "RSVP for unknown event"),
        }
        outcome
    }

    // =========================================================================
    // Toolbar
    // =========================================================================

    /// Debounced: only the last text of a burst is applied.
    pub fn set_search_text(&self, text: impl Into<String>) {
        self.search.schedule(text.into());
    }

    pub fn set_only_open(&self, only_open: bool) {
        self.shared.lock().view.only_open = only_open;
        self.paint();
    }

    pub fn set_sort_key(&self, sort_key: SortKey) {
        self.shared.lock().view.sort_key = sort_key;
        self.paint();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn view_state(&self) -> ViewState {
        self.shared.lock().view.clone()
    }

    /// Names of the clubs the current toolbar state shows, in display order.
    pub fn visible_club_names(&self) -> Vec<String> {
        let state = self.shared.lock();
        self.shared
            .pipeline
            .run(&state.roster, &state.view)
            .into_iter()
            .map(|club| club.name().to_string())
            .collect()
    }

    /// Id of the club with this name, ignoring case.
    pub fn club_id_by_name(&self, name: &str) -> Option<ClubId> {
        self.shared
            .lock()
            .roster
            .clubs()
            .iter()
            .find(|club| club.name().matches(name.trim()))
            .map(|club| club.id().clone())
    }

    /// Id of the member with this name in the given club, ignoring case.
    pub fn member_id_by_name(&self, club_id: &ClubId, name: &str) -> Option<MemberId> {
        self.shared
            .lock()
            .roster
            .find_by_id(club_id)?
            .members()
            .iter()
            .find(|member| member.name().matches(name))
            .map(|member| member.id().clone())
    }

    /// Id of the earliest event with this title in the given club, ignoring case.
    pub fn event_id_by_title(&self, club_id: &ClubId, title: &str) -> Option<EventId> {
        self.shared
            .lock()
            .roster
            .find_by_id(club_id)?
            .events()
            .iter()
            .find(|event| eq_ignore_case(event.title(), title.trim()))
            .map(|event| event.id().clone())
    }

    /// Read access to the roster; the lock is held for the duration of `f`.
    pub fn with_roster<R>(&self, f: impl FnOnce(&Roster) -> R) -> R {
        f(&self.shared.lock().roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockClockPort, MockRenderPort};
    use chrono::{TimeZone, Utc};
    use clubroster_domain::{demo_seeds, Club};

    /// Records every render and status call.
    #[derive(Default)]
    struct Recorder {
        renders: Mutex<Vec<Vec<String>>>,
        statuses: Mutex<Vec<(ClubId, String)>>,
        form_errors: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn renders(&self) -> Vec<Vec<String>> {
            self.renders.lock().unwrap().clone()
        }

        fn last_status(&self) -> Option<(ClubId, String)> {
            self.statuses.lock().unwrap().last().cloned()
        }

        fn last_form_error(&self) -> Option<String> {
            self.form_errors.lock().unwrap().last().cloned()
        }
    }

    impl RenderPort for Recorder {
        fn render(&self, cards: &[ClubCard]) {
            self.renders
                .lock()
                .unwrap()
                .push(cards.iter().map(|c| c.name.clone()).collect());
        }

        fn set_status(&self, club_id: &ClubId, message: &str) {
            self.statuses
                .lock()
                .unwrap()
                .push((club_id.clone(), message.to_string()));
        }

        fn set_form_error(&self, message: &str) {
            self.form_errors.lock().unwrap().push(message.to_string());
        }
    }

    const DEBOUNCE: Duration = Duration::from_millis(300);

    fn demo_app() -> (RosterApp, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let app = RosterApp::new(
            Roster::from_seeds(&demo_seeds()).unwrap(),
            DEBOUNCE,
            recorder.clone(),
            Arc::new(FixedClock::on(2025, 8, 29)),
        );
        (app, recorder)
    }

    fn club_id(app: &RosterApp, name: &str) -> ClubId {
        app.with_roster(|roster| {
            roster
                .clubs()
                .iter()
                .find(|c| c.name().as_str() == name)
                .map(|c| c.id().clone())
                .unwrap()
        })
    }

    fn with_club<R>(app: &RosterApp, id: &ClubId, f: impl FnOnce(&Club) -> R) -> R {
        app.with_roster(|roster| f(roster.find_by_id(id).unwrap()))
    }

    #[tokio::test]
    async fn paint_renders_demo_clubs_name_ascending() {
        let (app, recorder) = demo_app();
        app.paint();

        assert_eq!(
            recorder.renders(),
            vec![vec!["Art Club", "Book Club", "Coding Club", "Robotics"]]
        );
    }

    #[tokio::test]
    async fn paint_uses_clock_for_event_dates() {
        let mut renderer = MockRenderPort::new();
        renderer
            .expect_render()
            .withf(|cards| {
                let coding = cards.iter().find(|c| c.name == "Coding Club").unwrap();
                coding.events[0].when == "Sep 3, 2025 (2 days ago)" && coding.events[0].is_past
            })
            .times(1)
            .return_const(());

        let mut clock = MockClockPort::new();
        clock
            .expect_now()
            .times(1)
            .returning(|| Utc.with_ymd_and_hms(2025, 9, 5, 12, 0, 0).unwrap());

        let app = RosterApp::new(
            Roster::from_seeds(&demo_seeds()).unwrap(),
            DEBOUNCE,
            Arc::new(renderer),
            Arc::new(clock),
        );
        app.paint();
    }

    #[tokio::test]
    async fn only_open_and_sort_repaint_immediately() {
        let (app, recorder) = demo_app();

        app.set_only_open(true);
        app.set_sort_key(SortKey::SeatsDesc);

        let renders = recorder.renders();
        assert_eq!(renders.len(), 2);
        assert_eq!(renders[0], vec!["Book Club", "Coding Club", "Robotics"]);
        assert_eq!(renders[1], vec!["Book Club", "Coding Club", "Robotics"]);
        assert_eq!(
            app.view_state(),
            ViewState::new()
                .with_only_open(true)
                .with_sort_key(SortKey::SeatsDesc)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_search_repaints_once_with_last_text() {
        let (app, recorder) = demo_app();

        app.set_search_text("a");
        tokio::time::sleep(Duration::from_millis(100)).await;
        app.set_search_text("ar");
        tokio::time::sleep(Duration::from_millis(100)).await;
        app.set_search_text("art");

        tokio::time::sleep(DEBOUNCE - Duration::from_millis(1)).await;
        assert!(recorder.renders().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(recorder.renders(), vec![vec!["Art Club"]]);
        assert_eq!(app.view_state().search_text, "art");
    }

    #[tokio::test(start_paused = true)]
    async fn search_combines_with_sort() {
        let (app, _recorder) = demo_app();
        app.set_sort_key(SortKey::SeatsDesc);
        app.set_search_text("club");
        tokio::time::sleep(DEBOUNCE * 2).await;

        assert_eq!(
            app.visible_club_names(),
            vec!["Book Club", "Coding Club", "Art Club"]
        );
    }

    #[tokio::test]
    async fn add_club_clears_form_and_repaints() {
        let (app, recorder) = demo_app();

        let id = app.add_club("  Chess Club ", 4).unwrap();

        assert_eq!(recorder.last_form_error().as_deref(), Some(""));
        assert!(recorder.renders()[0].contains(&"Chess Club".to_string()));
        with_club(&app, &id, |club| assert_eq!(club.capacity().get(), 4));
    }

    #[tokio::test]
    async fn add_club_rejections_report_form_error() {
        let (app, recorder) = demo_app();

        assert_eq!(
            app.add_club("art club", 5),
            Err(DomainError::duplicate_name("art club"))
        );
        assert_eq!(
            recorder.last_form_error().as_deref(),
            Some("A club with this name already exists.")
        );

        assert!(app.add_club("Chess", 0).is_err());
        assert_eq!(
            recorder.last_form_error().as_deref(),
            Some("Please enter a valid club name and capacity (min 1).")
        );
        assert!(recorder.renders().is_empty());
        assert_eq!(app.with_roster(Roster::len), 4);
    }

    #[tokio::test]
    async fn add_member_reports_status() {
        let (app, recorder) = demo_app();
        let coding = club_id(&app, "Coding Club");

        app.add_member(&coding, "Ana").unwrap();
        assert_eq!(
            recorder.last_status(),
            Some((coding.clone(), "Member added.".to_string()))
        );
        assert_eq!(recorder.renders().len(), 1);

        assert!(app.add_member(&coding, "ANA").is_err());
        assert_eq!(
            recorder.last_status(),
            Some((coding.clone(), "Member name already exists.".to_string()))
        );
        with_club(&app, &coding, |club| assert_eq!(club.current(), 4));
    }

    #[tokio::test]
    async fn full_club_rejects_member() {
        let (app, recorder) = demo_app();
        let art = club_id(&app, "Art Club");

        assert_eq!(
            app.add_member(&art, "Zoe"),
            Err(DomainError::full(8, 8))
        );
        assert_eq!(
            recorder.last_status(),
            Some((art.clone(), "Club is at capacity.".to_string()))
        );
        assert!(recorder.renders().is_empty());
    }

    #[tokio::test]
    async fn add_member_to_unknown_club() {
        let (app, _recorder) = demo_app();
        let err = app.add_member(&ClubId::from_string("c_missing"), "Ana").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "Club", .. }));
    }

    #[tokio::test]
    async fn finds_club_by_name_ignoring_case() {
        let (app, _recorder) = demo_app();
        assert_eq!(
            app.club_id_by_name(" book club "),
            Some(club_id(&app, "Book Club"))
        );
        assert_eq!(app.club_id_by_name("Chess"), None);
    }

    #[tokio::test]
    async fn finds_members_and_events_by_name() {
        let (app, _recorder) = demo_app();
        let coding = club_id(&app, "Coding Club");
        let (first_member, hack_night) = with_club(&app, &coding, |club| {
            (club.members()[0].id().clone(), club.events()[1].id().clone())
        });

        assert_eq!(
            app.member_id_by_name(&coding, "member 1"),
            Some(first_member)
        );
        assert_eq!(app.member_id_by_name(&coding, "Member 9"), None);
        assert_eq!(
            app.event_id_by_title(&coding, " HACK NIGHT "),
            Some(hack_night)
        );
        assert_eq!(app.event_id_by_title(&coding, "Open Studio"), None);
        assert_eq!(
            app.member_id_by_name(&ClubId::from_string("c_missing"), "Member 1"),
            None
        );
    }

    #[tokio::test]
    async fn remove_member_repaints_only_when_removed() {
        let (app, recorder) = demo_app();
        let book = club_id(&app, "Book Club");
        let member = with_club(&app, &book, |club| club.members()[0].id().clone());

        assert!(app.remove_member(&book, &member));
        assert!(!app.remove_member(&book, &member));
        assert_eq!(recorder.renders().len(), 1);
        with_club(&app, &book, |club| assert_eq!(club.current(), 1));
    }

    #[tokio::test]
    async fn add_event_keeps_date_order() {
        let (app, recorder) = demo_app();
        let coding = club_id(&app, "Coding Club");

        app.add_event(&coding, NewEvent::new("Pairing", "2025-09-05"))
            .unwrap();

        assert_eq!(
            recorder.last_status(),
            Some((coding.clone(), "Event added.".to_string()))
        );
        let titles = with_club(&app, &coding, |club| {
            club.events()
                .iter()
                .map(|e| e.title().to_string())
                .collect::<Vec<_>>()
        });
        assert_eq!(titles, vec!["Intro to Git", "Pairing", "Hack Night"]);
    }

    #[tokio::test]
    async fn add_event_rejections() {
        let (app, recorder) = demo_app();
        let coding = club_id(&app, "Coding Club");

        assert!(app.add_event(&coding, NewEvent::new("  ", "2025-09-05")).is_err());
        assert_eq!(
            recorder.last_status().map(|(_, m)| m).as_deref(),
            Some("Enter a title, date, and capacity (>0).")
        );

        assert_eq!(
            app.add_event(&coding, NewEvent::new("Demo", "next week")),
            Err(DomainError::invalid_date("next week"))
        );
        assert_eq!(
            recorder.last_status().map(|(_, m)| m).as_deref(),
            Some("Please pick a valid date.")
        );

        assert!(app
            .add_event(&coding, NewEvent::new("Demo", "2025-09-05").with_capacity(0))
            .is_err());
        with_club(&app, &coding, |club| assert_eq!(club.events().len(), 2));
        assert!(recorder.renders().is_empty());
    }

    #[tokio::test]
    async fn remove_event() {
        let (app, recorder) = demo_app();
        let art = club_id(&app, "Art Club");
        let event = with_club(&app, &art, |club| club.events()[0].id().clone());

        assert!(app.remove_event(&art, &event));
        assert!(!app.remove_event(&art, &event));
        assert_eq!(recorder.renders().len(), 1);
    }

    #[tokio::test]
    async fn toggle_rsvp_round_trip() {
        let (app, recorder) = demo_app();
        let coding = club_id(&app, "Coding Club");
        let (event, member) = with_club(&app, &coding, |club| {
            (club.events()[0].id().clone(), club.members()[0].id().clone())
        });

        assert_eq!(
            app.toggle_rsvp(&coding, &event, &member),
            Some(RsvpOutcome::Added)
        );
        assert_eq!(
            app.toggle_rsvp(&coding, &event, &member),
            Some(RsvpOutcome::Removed)
        );
        assert_eq!(recorder.renders().len(), 2);
    }

    #[tokio::test]
    async fn toggle_rsvp_for_outsider_does_not_repaint() {
        let (app, recorder) = demo_app();
        let coding = club_id(&app, "Coding Club");
        let event = with_club(&app, &coding, |club| club.events()[0].id().clone());
        let outsider = MemberId::from_string("m_outsider");

        assert_eq!(
            app.toggle_rsvp(&coding, &event, &outsider),
            Some(RsvpOutcome::NotAMember)
        );
        assert_eq!(
            app.toggle_rsvp(&coding, &EventId::from_string("e_missing"), &outsider),
            None
        );
        assert!(recorder.renders().is_empty());
    }
}
