use rand::seq::SliceRandom;
use std::time::SystemTime;

/// Particle for celebration animation
#[derive(Debug, Clone)]
pub struct CelebrationParticle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
}

impl CelebrationParticle {
    fn new(x: f64, y: f64) -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        Self {
            x,
            y,
            vel_x: rng.gen_range(-3.0..3.0),
            vel_y: rng.gen_range(-4.0..-1.0),
            symbol: *['✨', '🎉', '⭐', '💫', '🌟', '×', '🎊']
                .choose(&mut rng)
                .unwrap_or(&'✨'),
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(2.0..4.0),
        }
    }

    fn update(&mut self, dt: f64) -> bool {
        self.x += self.vel_x * dt;
        self.y += self.vel_y * dt;
        self.vel_y += 15.0 * dt; // Gravity pulls confetti back down

        self.age += dt;
        self.age < self.max_age
    }
}

/// Animation state shown over the results screen after a perfect session
#[derive(Debug)]
pub struct CelebrationAnimation {
    pub particles: Vec<CelebrationParticle>,
    pub start_time: SystemTime,
    pub duration: f64, // seconds
    pub is_active: bool,
    pub terminal_width: f64,
    pub terminal_height: f64,
}

impl CelebrationAnimation {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            start_time: SystemTime::now(),
            duration: 3.0,
            is_active: false,
            terminal_width: 80.0,
            terminal_height: 24.0,
        }
    }

    pub fn start(&mut self, width: u16, height: u16) {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        self.particles.clear();
        self.start_time = SystemTime::now();
        self.is_active = true;
        self.terminal_width = width as f64;
        self.terminal_height = height as f64;

        let center_x = width as f64 / 2.0;
        let center_y = height as f64 / 2.0;

        // Burst of confetti spread around the center of the screen
        for _ in 0..40 {
            let offset_x = rng.gen_range(-15.0..15.0);
            let offset_y = rng.gen_range(-8.0..8.0);
            self.particles.push(CelebrationParticle::new(
                center_x + offset_x,
                center_y + offset_y,
            ));
        }
    }

    pub fn update(&mut self) {
        if !self.is_active {
            return;
        }

        let elapsed = self.start_time.elapsed().unwrap_or_default().as_secs_f64();
        if elapsed >= self.duration {
            self.is_active = false;
            self.particles.clear();
            return;
        }

        let dt = 0.1; // Fixed timestep for animation
        self.particles.retain_mut(|particle| {
            let still_alive = particle.update(dt);

            // Remove particles once they drift off screen (with a small buffer
            // so they exit smoothly instead of popping at the edge)
            let buffer = 5.0;
            let off_screen = particle.y > self.terminal_height + buffer
                || particle.x < -buffer
                || particle.x > self.terminal_width + buffer;
            still_alive && !off_screen
        });
    }
}

impl Default for CelebrationAnimation {
    fn default() -> Self {
        Self::new()
    }
}
