//! The carousel primitive.
//!
//! Renders a strip of slides and advances the active slide on a fixed
//! interval. Each instance owns its timer; the timer is cleared when the
//! component is disposed, so an unmounted carousel never ticks.

use std::time::Duration;

use leptos::*;

/// Carousel behavior knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    /// Gap between slides, in pixels.
    pub spacing: u32,
    /// How many slides are visible at once.
    pub slides_per_view: usize,
    /// Center the active slide instead of left-aligning it.
    pub centered: bool,
    /// Wrap from the last slide back to the first.
    pub looped: bool,
    /// Auto-advance delay in milliseconds; `0` disables autoplay.
    pub autoplay_ms: u64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            spacing: 16,
            slides_per_view: 1,
            centered: false,
            looped: true,
            autoplay_ms: 3000,
        }
    }
}

/// Auto-advancing sequence of `count` slides, each produced by
/// `render_slide`. Zero slides renders nothing; autoplay is only armed for
/// two or more.
#[component]
pub fn Carousel<F, IV>(options: CarouselOptions, count: usize, render_slide: F) -> impl IntoView
where
    F: Fn(usize) -> IV + 'static,
    IV: IntoView,
{
    if count == 0 {
        return ().into_view();
    }

    let active = create_rw_signal(0usize);

    if options.autoplay_ms > 0 && count > 1 {
        let handle = set_interval_with_handle(
            move || {
                active.update(|slide| {
                    *slide = if options.looped {
                        (*slide + 1) % count
                    } else {
                        (*slide + 1).min(count - 1)
                    };
                });
            },
            Duration::from_millis(options.autoplay_ms),
        );
        if let Ok(handle) = handle {
            on_cleanup(move || handle.clear());
        }
    }

    let slides_per_view = options.slides_per_view.max(1);
    let step = 100.0 / slides_per_view as f32;
    let center_offset = if options.centered { (100.0 - step) / 2.0 } else { 0.0 };
    let track_style = move || {
        let shift = active.get() as f32 * step - center_offset;
        format!(
            "display: flex; gap: {}px; transition: transform 0.4s ease; transform: translateX({}%);",
            options.spacing, -shift
        )
    };
    let slide_style = format!(
        "flex: 0 0 calc({step}% - {}px);",
        options.spacing
    );

    view! {
        <div class="carousel" class=("carousel-centered", options.centered)>
            <div class="carousel-track" style=track_style>
                {(0..count)
                    .map(|index| {
                        view! {
                            <div
                                class="carousel-slide"
                                class=("carousel-slide-active", move || active.get() == index)
                                style=slide_style.clone()
                            >
                                {render_slide(index)}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}
