use crate::config::join_asset_path;

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub src: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub active: bool,
}

/// Screenshot slider: slides, their dots and the current position.
///
/// Slides and indicators are built once and never removed. Navigation goes
/// through [`change_slide`](Self::change_slide) and
/// [`current_slide`](Self::current_slide), which always store the new index
/// before the display transition runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryController {
    slides: Vec<Slide>,
    indicators: Vec<Indicator>,
    current: i64,
}

impl GalleryController {
    pub fn initialize(images: &[String], asset_dir: &str) -> Self {
        if images.is_empty() {
            tracing::debug!("gallery: no screenshots configured");
            return Self::default();
        }

        let slides = images
            .iter()
            .enumerate()
            .map(|(i, file)| Slide {
                src: join_asset_path(asset_dir, file),
                active: i == 0,
            })
            .collect();
        let indicators = (0..images.len())
            .map(|i| Indicator { active: i == 0 })
            .collect();

        Self {
            slides,
            indicators,
            current: 0,
        }
    }

    /// Display transition on the stored index. `n` is only compared against
    /// the bounds; in range, whatever is stored is what gets shown.
    fn show_slide(&mut self, n: i64) {
        for slide in &mut self.slides {
            slide.active = false;
        }
        for dot in &mut self.indicators {
            dot.active = false;
        }

        let count = self.slides.len() as i64;
        if count == 0 {
            return;
        }
        if n >= count {
            self.current = 0;
        }
        if n < 0 {
            self.current = count - 1;
        }

        let idx = self.current as usize;
        self.slides[idx].active = true;
        self.indicators[idx].active = true;
    }

    /// Relative navigation (previous / next).
    pub fn change_slide(&mut self, delta: i64) {
        if self.slides.is_empty() {
            return;
        }
        self.current = self.current.saturating_add(delta);
        self.show_slide(self.current);
    }

    /// Absolute navigation with a 1-based position (dot clicks).
    pub fn current_slide(&mut self, position: i64) {
        if self.slides.is_empty() {
            return;
        }
        self.current = position.saturating_sub(1);
        self.show_slide(self.current);
    }

    /// One step of timed rotation. Nothing calls this unless rotation is
    /// enabled in the site config.
    pub fn auto_slide(&mut self) {
        self.change_slide(1);
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the active slide, `None` for an empty gallery.
    pub fn active_index(&self) -> Option<usize> {
        self.slides.iter().position(|s| s.active)
    }
}

/// Whether an image load failure for `src` should be swallowed.
pub fn suppresses_load_error(src: &str, screenshot_dir: &str) -> bool {
    let dir = screenshot_dir.trim_matches('/');
    if dir.is_empty() {
        return false;
    }
    // Browsers report absolute URLs; compare on the path segment.
    src.contains(&format!("/{dir}/")) || src.starts_with(&format!("{dir}/"))
}
