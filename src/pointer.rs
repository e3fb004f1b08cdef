// Latest pointer state as reported by the page's mouse events.
// Position is tracked whether or not the button is held.

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pointer {
    pub pos: Vector2<f64>,
    pub is_down: bool,
}

impl Pointer {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = [x, y];
    }

    pub fn set_down(&mut self, is_down: bool) {
        self.is_down = is_down;
    }
}
