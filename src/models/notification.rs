/// Title/body pair handed to a notifier, plus whether to play a sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub body: &'static str,
    pub sound: bool,
}

impl Notification {
    pub fn stand_up(sound: bool) -> Self {
        Self {
            title: "Time to Stand Up! 🐾",
            body: "You've been sitting for a while. Let's stretch and move!",
            sound,
        }
    }

    pub fn work_start(sound: bool) -> Self {
        Self {
            title: "Good Morning! ☀️",
            body: "Time to start the day! Let's stay healthy and productive together!",
            sound,
        }
    }

    pub fn work_end(sound: bool) -> Self {
        Self {
            title: "Great Job Today! 🎉",
            body: "Work is done! Time to relax and enjoy your evening!",
            sound,
        }
    }
}
