// Example: driving a restorer by hand with a fake timer.
use scroll_restore::{
    IntervalTimer, NavigationEvent, PositionStore, ScrollElement, ScrollRestorer, TimerId,
};

struct Pane {
    offset: u64,
    extent: u64,
}

impl ScrollElement for Pane {
    fn id(&self) -> Option<&str> {
        Some("results")
    }

    fn scroll_offset(&self) -> u64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    fn scroll_extent(&self) -> u64 {
        self.extent
    }
}

#[derive(Default)]
struct Timers {
    next: u64,
}

impl IntervalTimer for Timers {
    fn start_interval(&mut self, interval_ms: u64) -> TimerId {
        self.next += 1;
        println!("start timer {} every {interval_ms}ms", self.next);
        TimerId(self.next)
    }

    fn cancel(&mut self, id: TimerId) {
        println!("cancel timer {}", id.0);
    }
}

fn main() {
    let mut store = PositionStore::new();
    let mut timers = Timers::default();
    let mut restorer = ScrollRestorer::default();
    restorer.on_attach(
        Pane {
            offset: 0,
            extent: 800,
        },
        &mut timers,
    );

    restorer.on_navigation(&NavigationEvent::end("/search;q=rust"), &mut store, &mut timers);
    if let Some(pane) = restorer.element_mut() {
        pane.offset = 640;
    }
    restorer.on_navigation(&NavigationEvent::start("/item/3"), &mut store, &mut timers);
    println!("saved: {:?}", store.get("/search"));

    // Coming back: the results are re-fetched and grow over a few ticks.
    if let Some(pane) = restorer.element_mut() {
        pane.offset = 0;
        pane.extent = 0;
    }
    restorer.on_navigation(&NavigationEvent::end("/search;q=rust"), &mut store, &mut timers);

    for extent in [120, 480, 960] {
        let Some(id) = restorer.active_timer() else {
            break;
        };
        if let Some(pane) = restorer.element_mut() {
            pane.extent = extent;
        }
        println!("tick extent={extent}: {:?}", restorer.on_tick(id, &mut timers));
    }

    restorer.on_detach(&mut timers);
}
