use rand::Rng;

/// One floating dot in the hero background
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_pct: f64,
    pub bottom_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(2.0..8.0),
            left_pct: rng.gen_range(0.0..100.0),
            bottom_pct: rng.gen_range(0.0..20.0),
            duration_s: rng.gen_range(10.0..25.0),
            delay_s: rng.gen_range(0.0..5.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.2}%; bottom: {bottom:.2}%; \
             animation: hero-float {duration:.2}s linear infinite; animation-delay: {delay:.2}s;",
            size = self.size_px,
            left = self.left_pct,
            bottom = self.bottom_pct,
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

/// Generated once per mount and rendered as-is until unmount.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(&mut *rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_requested_count_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate(20, &mut rng);
        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert!((2.0..8.0).contains(&p.size_px));
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..20.0).contains(&p.bottom_pct));
            assert!((10.0..25.0).contains(&p.duration_s));
            assert!((0.0..5.0).contains(&p.delay_s));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = generate(5, &mut StdRng::seed_from_u64(42));
        let b = generate(5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_style_mentions_animation() {
        let p = Particle {
            size_px: 4.0,
            left_pct: 50.0,
            bottom_pct: 10.0,
            duration_s: 12.0,
            delay_s: 1.5,
        };
        let style = p.style();
        assert!(style.starts_with("width: 4.00px; height: 4.00px;"));
        assert!(style.contains("hero-float 12.00s linear infinite"));
        assert!(style.ends_with("animation-delay: 1.50s;"));
    }
}
