use scroll_restore::NavigationEvent;
use scroll_restore_adapter::{Host, MemoryElement};

fn main() {
    // Example: a headless host standing in for a router + view framework.
    //
    // A real integration would:
    // - call attach/detach from the view's mount/unmount hooks
    // - forward every router event to navigate()
    // - call advance(now_ms) from a setInterval/event-loop callback
    let mut host = Host::new();
    let inbox = host.attach(MemoryElement::new(Some("inbox")).with_extent(3_000));

    for (step, url) in ["/inbox", "/message/12", "/inbox"].into_iter().enumerate() {
        host.navigate(&NavigationEvent::start(url));
        host.navigate(&NavigationEvent::end(url));

        if step == 0 {
            if let Some(el) = host.element_mut(inbox) {
                el.scroll_to(1_800);
            }
        }
        if step == 1 {
            // The inbox list is re-rendered from scratch when we come back.
            if let Some(el) = host.element_mut(inbox) {
                el.set_extent(0);
            }
        }
    }

    let mut now_ms = host.now_ms();
    for loaded in [600, 1_200, 2_400] {
        now_ms += 250;
        if let Some(el) = host.element_mut(inbox) {
            el.set_extent(loaded);
        }
        for (view, outcome) in host.advance(now_ms) {
            println!("t={now_ms}ms view={view:?} {outcome:?}");
        }
    }

    println!(
        "offset after restore: {:?}",
        host.element(inbox).map(|el| el.offset)
    );
    host.detach(inbox);
}
