use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One rotating headline on the landing section.
pub struct HeroSlide {
    pub title: &'static str,
    pub tagline: &'static str,
}

pub const HERO_SLIDES: [HeroSlide; 4] = [
    HeroSlide {
        title: "Find Your Perfect Space",
        tagline: "Explore unique apartments tailored to your comfort.",
    },
    HeroSlide {
        title: "Where Comfort Meets Style",
        tagline: "Modern homes in scenic locations await you.",
    },
    HeroSlide {
        title: "Live the Lifestyle You Deserve",
        tagline: "Curated homes with exceptional amenities.",
    },
    HeroSlide {
        title: "Discover Your New Home",
        tagline: "Browse properties handpicked for your lifestyle.",
    },
];

const ROTATE_INTERVAL: Duration = Duration::from_secs(5);

/// Index-mod-N headline rotation. Owns nothing but its counter and shares no
/// state with the listing core.
pub struct HeroCarousel {
    index: AtomicUsize,
}

impl HeroCarousel {
    pub fn new() -> Self {
        Self {
            index: AtomicUsize::new(0),
        }
    }

    pub fn current(&self) -> &'static HeroSlide {
        &HERO_SLIDES[self.index.load(Ordering::Relaxed) % HERO_SLIDES.len()]
    }

    pub fn advance(&self) {
        self.index.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for HeroCarousel {
    fn default() -> Self {
        Self::new()
    }
}

/// Detached timer driving the rotation for as long as the server runs.
pub fn spawn_ticker(carousel: Arc<HeroCarousel>) {
    std::thread::spawn(move || loop {
        std::thread::sleep(ROTATE_INTERVAL);
        carousel.advance();
    });
}
