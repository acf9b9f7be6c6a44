/// Which day-boundary event is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

impl Boundary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Boundary::Start => "work-start",
            Boundary::End => "work-end",
        }
    }
}
