use crate::*;

use alloc::string::String;
use alloc::vec::Vec;

#[derive(Clone, Debug, Default)]
struct TestElement {
    id: Option<String>,
    offset: u64,
    extent: u64,
    writes: Vec<u64>,
}

impl TestElement {
    fn new(id: Option<&str>, extent: u64) -> Self {
        Self {
            id: id.map(String::from),
            extent,
            ..Self::default()
        }
    }
}

impl ScrollElement for TestElement {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn scroll_offset(&self) -> u64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.offset = offset;
        self.writes.push(offset);
    }

    fn scroll_extent(&self) -> u64 {
        self.extent
    }
}

#[derive(Debug, Default)]
struct TestTimer {
    next: u64,
    active: Vec<TimerId>,
    started: Vec<(TimerId, u64)>,
}

impl IntervalTimer for TestTimer {
    fn start_interval(&mut self, interval_ms: u64) -> TimerId {
        self.next += 1;
        let id = TimerId(self.next);
        self.active.push(id);
        self.started.push((id, interval_ms));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.active.retain(|t| *t != id);
    }
}

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    fn gen_segment(&mut self) -> String {
        const CHARS: &[u8] = b"abcxyz019-_.~%=";
        let len = self.gen_range_usize(0, 6);
        (0..len)
            .map(|_| CHARS[self.gen_range_usize(0, CHARS.len())] as char)
            .collect()
    }

    /// Returns `(base, url)` where `url` is `base` plus zero or more `;k=v` matrix params.
    fn gen_url(&mut self) -> (String, String) {
        let mut base = String::new();
        for _ in 0..self.gen_range_usize(0, 4) {
            base.push('/');
            base.push_str(&self.gen_segment());
        }
        let mut url = base.clone();
        for _ in 0..self.gen_range_usize(0, 3) {
            url.push(';');
            url.push_str(&self.gen_segment());
            if self.gen_bool() {
                url.push('=');
                url.push_str(&self.gen_segment());
            }
        }
        (base, url)
    }
}

fn attached(id: Option<&str>, extent: u64) -> ScrollRestorer<TestElement> {
    let mut r = ScrollRestorer::default();
    r.on_attach(TestElement::new(id, extent), &mut TestTimer::default());
    r
}

fn tick_with_extents(
    r: &mut ScrollRestorer<TestElement>,
    timer: &mut TestTimer,
    extents: &[u64],
) -> Vec<TickOutcome> {
    let mut out = Vec::new();
    for &extent in extents {
        r.element_mut().unwrap().extent = extent;
        let id = r.active_timer().unwrap();
        out.push(r.on_tick(id, timer));
    }
    out
}

#[test]
fn route_key_strips_matrix_parameters() {
    assert_eq!(RouteKey::from_url("/users;page=2;sort=asc").as_str(), "/users");
    assert_eq!(RouteKey::from_url("/users").as_str(), "/users");
    assert_eq!(RouteKey::from_url(";x=1").as_str(), "");
    assert_eq!(
        RouteKey::from_url("/a;p=1"),
        RouteKey::from_url("/a;p=2"),
        "matrix params must not split keys"
    );
}

#[test]
fn derive_key_prefers_url_after_redirects() {
    let redirected = NavigationEvent::end_redirected("/old;x=1", "/new;y=2");
    assert_eq!(
        PositionStore::derive_key(&redirected),
        Some(RouteKey::from_url("/new"))
    );

    let plain = NavigationEvent::end("/plain;x=1");
    assert_eq!(
        PositionStore::derive_key(&plain),
        Some(RouteKey::from_url("/plain"))
    );

    let empty_redirect = NavigationEvent::end_redirected("/kept", "");
    assert_eq!(
        PositionStore::derive_key(&empty_redirect),
        Some(RouteKey::from_url("/kept"))
    );

    let start = NavigationEvent::start("/next;q=3");
    assert_eq!(
        PositionStore::derive_key(&start),
        Some(RouteKey::from_url("/next"))
    );
}

#[test]
fn derive_key_matches_url_base_for_random_urls() {
    let mut rng = Lcg::new(0x5eed_1234);
    for _ in 0..2_000 {
        let (base, url) = rng.gen_url();
        let (redirect_base, redirect) = rng.gen_url();

        let start = NavigationEvent::start(url.clone());
        assert_eq!(
            PositionStore::derive_key(&start).as_ref().map(RouteKey::as_str),
            Some(base.as_str()),
            "start url={url:?}"
        );

        let end = NavigationEvent::end(url.clone());
        assert_eq!(
            PositionStore::derive_key(&end).as_ref().map(RouteKey::as_str),
            Some(base.as_str()),
            "end url={url:?}"
        );

        let redirected = NavigationEvent::end_redirected(url.clone(), redirect.clone());
        let expected = if redirect.is_empty() {
            &base
        } else {
            &redirect_base
        };
        assert_eq!(
            PositionStore::derive_key(&redirected)
                .as_ref()
                .map(RouteKey::as_str),
            Some(expected.as_str()),
            "url={url:?} redirect={redirect:?}"
        );
    }
}

#[test]
fn derive_key_ignores_other_event_kinds() {
    let cancel = NavigationEvent::Cancel { url: "/a".into() };
    let error = NavigationEvent::Error { url: "/a".into() };
    assert_eq!(PositionStore::derive_key(&cancel), None);
    assert_eq!(PositionStore::derive_key(&error), None);
    assert_eq!(cancel.kind(), NavigationKind::Cancel);
}

#[test]
fn store_save_overwrites() {
    let mut store = PositionStore::new();
    assert!(store.get("/a").is_none());

    store.save(RouteKey::from_url("/a"), SavedPosition::new(Some("list"), 10));
    assert_eq!(store.get("/a"), Some(&SavedPosition::new(Some("list"), 10)));

    store.save(RouteKey::from_url("/a"), SavedPosition::new(None, 20));
    assert_eq!(store.get("/a"), Some(&SavedPosition::new(None, 20)));
    assert_eq!(store.len(), 1);

    assert_eq!(store.remove("/a").map(|p| p.position), Some(20));
    assert!(store.is_empty());
}

#[test]
fn pairing_only_matches_end_then_start() {
    let mut p = NavigationPairing::new();
    assert!(p.observe(&NavigationEvent::start("/a")).is_none());
    assert!(p.observe(&NavigationEvent::end("/a")).is_none());
    let prev = p.observe(&NavigationEvent::start("/b"));
    assert_eq!(prev, Some(NavigationEvent::end("/a")));

    // A cancel between end and start breaks the pair.
    p.observe(&NavigationEvent::end("/b"));
    p.observe(&NavigationEvent::Cancel { url: "/c".into() });
    assert!(p.observe(&NavigationEvent::start("/d")).is_none());
}

#[test]
fn exit_saves_under_the_route_being_left() {
    let mut store = PositionStore::new();
    let mut timer = TestTimer::default();
    let mut r = attached(Some("list"), 1000);

    r.on_navigation(&NavigationEvent::end("/a;page=1"), &mut store, &mut timer);
    r.element_mut().unwrap().offset = 320;
    r.on_navigation(&NavigationEvent::start("/b"), &mut store, &mut timer);

    assert_eq!(store.get("/a"), Some(&SavedPosition::new(Some("list"), 320)));
    assert!(store.get("/b").is_none());
}

#[test]
fn exit_saves_empty_id_as_anonymous() {
    let mut store = PositionStore::new();
    let mut timer = TestTimer::default();
    let mut r = attached(Some(""), 1000);

    r.on_navigation(&NavigationEvent::end("/a"), &mut store, &mut timer);
    r.on_navigation(&NavigationEvent::start("/b"), &mut store, &mut timer);

    assert_eq!(store.get("/a").unwrap().element_id, None);
}

#[test]
fn exit_cancels_running_attempt() {
    let mut store = PositionStore::new();
    let mut timer = TestTimer::default();
    let mut r = attached(Some("list"), 0);

    assert!(r.restore(500, &mut timer));
    r.on_navigation(&NavigationEvent::end("/a"), &mut store, &mut timer);
    r.on_navigation(&NavigationEvent::start("/b"), &mut store, &mut timer);

    assert!(!r.is_polling());
    assert!(timer.active.is_empty());
}

#[test]
fn enter_restores_matching_element() {
    let mut store = PositionStore::new();
    let mut timer = TestTimer::default();
    store.save(RouteKey::from_url("/a"), SavedPosition::new(Some("list"), 300));

    let mut r = attached(Some("list"), 1000);
    r.on_navigation(&NavigationEvent::end("/a;tab=2"), &mut store, &mut timer);

    assert_eq!(
        r.state(),
        RestorationState::Polling {
            target: 300,
            attempts: 0
        }
    );
    assert_eq!(timer.started, [(TimerId(1), 250)]);

    let outcome = r.on_tick(TimerId(1), &mut timer);
    assert_eq!(
        outcome,
        TickOutcome::Restored {
            offset: 300,
            attempts: 0
        }
    );
    assert_eq!(r.element().unwrap().offset, 300);
    assert!(timer.active.is_empty());
}

#[test]
fn enter_ignores_mismatched_element() {
    let mut store = PositionStore::new();
    let mut timer = TestTimer::default();
    store.save(RouteKey::from_url("/a"), SavedPosition::new(Some("list-a"), 300));

    let mut r = attached(Some("list-b"), 1000);
    r.on_navigation(&NavigationEvent::end("/a"), &mut store, &mut timer);

    assert!(!r.is_polling());
    assert!(timer.started.is_empty());
}

#[test]
fn enter_matches_anonymous_elements() {
    let mut store = PositionStore::new();
    let mut timer = TestTimer::default();
    store.save(RouteKey::from_url("/a"), SavedPosition::new(None, 40));

    let mut named = attached(Some("list"), 1000);
    named.on_navigation(&NavigationEvent::end("/a"), &mut store, &mut timer);
    assert!(!named.is_polling());

    let mut anonymous = attached(None, 1000);
    anonymous.on_navigation(&NavigationEvent::end("/a"), &mut store, &mut timer);
    assert!(anonymous.is_polling());
}

#[test]
fn enter_without_saved_position_does_nothing() {
    let mut store = PositionStore::new();
    let mut timer = TestTimer::default();
    let mut r = attached(Some("list"), 1000);
    r.on_navigation(&NavigationEvent::end("/fresh"), &mut store, &mut timer);
    assert_eq!(r.state(), RestorationState::Idle);
}

#[test]
fn bounded_retry_falls_back_to_extent() {
    let mut timer = TestTimer::default();
    let mut r = attached(Some("list"), 0);
    r.restore(500, &mut timer);

    let outcomes = tick_with_extents(&mut r, &mut timer, &[100, 200, 300, 400, 400]);
    assert_eq!(
        outcomes,
        [
            TickOutcome::Pending { attempts: 1 },
            TickOutcome::Pending { attempts: 2 },
            TickOutcome::Pending { attempts: 3 },
            TickOutcome::Pending { attempts: 4 },
            TickOutcome::Fallback {
                offset: 400,
                attempts: 5
            },
        ]
    );
    assert_eq!(r.element().unwrap().offset, 400);
    assert_eq!(r.element().unwrap().writes, [400]);
    assert!(!r.is_polling());
    assert!(timer.active.is_empty());
}

#[test]
fn early_success_sets_exact_target() {
    let mut timer = TestTimer::default();
    let mut r = attached(Some("list"), 0);
    r.restore(150, &mut timer);

    let outcomes = tick_with_extents(&mut r, &mut timer, &[50, 200]);
    assert_eq!(
        outcomes,
        [
            TickOutcome::Pending { attempts: 1 },
            TickOutcome::Restored {
                offset: 150,
                attempts: 1
            },
        ]
    );
    assert_eq!(r.element().unwrap().offset, 150);
    assert!(timer.active.is_empty());
}

#[test]
fn exhausted_budget_with_zero_extent_leaves_offset_alone() {
    let mut timer = TestTimer::default();
    let mut r = attached(Some("list"), 0);
    r.restore(10, &mut timer);

    let outcomes = tick_with_extents(&mut r, &mut timer, &[0, 0, 0, 0, 0]);
    assert_eq!(outcomes[4], TickOutcome::Abandoned { attempts: 5 });
    assert!(r.element().unwrap().writes.is_empty());
    assert!(!r.is_polling());
}

#[test]
fn zero_target_restores_on_first_tick() {
    let mut timer = TestTimer::default();
    let mut r = attached(None, 0);
    r.element_mut().unwrap().offset = 90;
    r.restore(0, &mut timer);
    let id = r.active_timer().unwrap();
    assert_eq!(
        r.on_tick(id, &mut timer),
        TickOutcome::Restored {
            offset: 0,
            attempts: 0
        }
    );
    assert_eq!(r.element().unwrap().offset, 0);
}

#[test]
fn restart_cancels_previous_timer() {
    let mut timer = TestTimer::default();
    let mut r = attached(Some("list"), 0);

    r.restore(100, &mut timer);
    let first = r.active_timer().unwrap();
    r.on_tick(first, &mut timer);
    r.restore(200, &mut timer);
    let second = r.active_timer().unwrap();

    assert_ne!(first, second);
    assert_eq!(timer.active, [second]);
    assert_eq!(
        r.state(),
        RestorationState::Polling {
            target: 200,
            attempts: 0
        }
    );

    // A late tick from the cancelled timer is ignored.
    assert_eq!(r.on_tick(first, &mut timer), TickOutcome::Idle);
    assert!(r.is_polling());
}

#[test]
fn reattach_cancels_attempt_for_previous_element() {
    let mut store = PositionStore::new();
    let mut timer = TestTimer::default();
    store.save(RouteKey::from_url("/a"), SavedPosition::new(Some("list-a"), 500));

    let mut r = attached(Some("list-a"), 0);
    r.on_navigation(&NavigationEvent::end("/a"), &mut store, &mut timer);
    let stale = r.active_timer().unwrap();

    let previous = r.on_attach(TestElement::new(Some("list-b"), 1000), &mut timer);
    assert_eq!(previous.unwrap().id.as_deref(), Some("list-a"));
    assert_eq!(r.state(), RestorationState::Idle);
    assert!(timer.active.is_empty());

    assert_eq!(r.on_tick(stale, &mut timer), TickOutcome::Idle);
    let list_b = r.element().unwrap();
    assert_eq!(list_b.offset, 0);
    assert!(list_b.writes.is_empty());
}

#[test]
fn detach_is_idempotent() {
    let mut timer = TestTimer::default();

    let mut never_attached: ScrollRestorer<TestElement> = ScrollRestorer::default();
    assert!(never_attached.on_detach(&mut timer).is_none());
    assert!(never_attached.on_detach(&mut timer).is_none());

    let mut r = attached(Some("list"), 0);
    r.restore(100, &mut timer);
    assert!(r.on_detach(&mut timer).is_some());
    assert!(r.on_detach(&mut timer).is_none());
    assert!(timer.active.is_empty());
    assert!(!r.is_attached());
}

#[test]
fn detached_restorer_ignores_navigation() {
    let mut store = PositionStore::new();
    let mut timer = TestTimer::default();
    store.save(RouteKey::from_url("/a"), SavedPosition::new(Some("list"), 300));

    let mut r = attached(Some("list"), 1000);
    r.on_navigation(&NavigationEvent::end("/b"), &mut store, &mut timer);
    r.on_detach(&mut timer);

    r.on_navigation(&NavigationEvent::start("/a"), &mut store, &mut timer);
    r.on_navigation(&NavigationEvent::end("/a"), &mut store, &mut timer);

    assert!(store.get("/b").is_none());
    assert!(timer.started.is_empty());
    assert!(!r.restore(10, &mut timer));
}

#[test]
fn options_are_clamped() {
    let o = RestorerOptions::new()
        .with_poll_interval_ms(0)
        .with_max_attempts(0);
    assert_eq!(o.poll_interval_ms, 1);
    assert_eq!(o.max_attempts, 1);
    assert_eq!(RestorerOptions::default().max_wait_ms(), 1250);
}

#[test]
fn custom_budget_is_respected() {
    let mut timer = TestTimer::default();
    let mut r = ScrollRestorer::new(
        RestorerOptions::new()
            .with_poll_interval_ms(100)
            .with_max_attempts(2),
    );
    r.on_attach(TestElement::new(Some("list"), 0), &mut timer);
    r.restore(500, &mut timer);
    assert_eq!(timer.started[0].1, 100);

    let outcomes = tick_with_extents(&mut r, &mut timer, &[10, 20]);
    assert_eq!(
        outcomes[1],
        TickOutcome::Fallback {
            offset: 20,
            attempts: 2
        }
    );
}

#[test]
fn away_and_back_round_trip() {
    let mut store = PositionStore::new();
    let mut timer = TestTimer::default();
    let mut r = attached(Some("feed"), 2000);

    r.on_navigation(&NavigationEvent::start("/feed"), &mut store, &mut timer);
    r.on_navigation(&NavigationEvent::end("/feed"), &mut store, &mut timer);
    r.element_mut().unwrap().offset = 750;

    r.on_navigation(&NavigationEvent::start("/detail/7"), &mut store, &mut timer);
    r.on_navigation(&NavigationEvent::end("/detail/7"), &mut store, &mut timer);
    r.element_mut().unwrap().offset = 0;

    r.on_navigation(&NavigationEvent::start("/feed"), &mut store, &mut timer);
    r.on_navigation(&NavigationEvent::end("/feed"), &mut store, &mut timer);

    assert_eq!(store.get("/feed").unwrap().position, 750);
    assert_eq!(store.get("/detail/7").unwrap().position, 0);

    let id = r.active_timer().unwrap();
    assert!(r.on_tick(id, &mut timer).is_finished());
    assert_eq!(r.element().unwrap().offset, 750);
}
