#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    pub const fn dim(self) -> Rgb {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }
}

pub const LETTERBOX: Rgb = Rgb(12, 12, 16);
pub const SKY_TOP: Rgb = Rgb(78, 192, 202);
pub const SKY_BOT: Rgb = Rgb(200, 236, 240);
pub const CLOUD: Rgb = Rgb(232, 248, 240);
pub const CITY: Rgb = Rgb(164, 214, 196);
pub const CITY_WINDOW: Rgb = Rgb(190, 228, 210);
pub const BUSH: Rgb = Rgb(94, 184, 70);
pub const GRASS: Rgb = Rgb(84, 168, 55);
pub const GRASS_LIGHT: Rgb = Rgb(140, 214, 80);
pub const DIRT: Rgb = Rgb(222, 216, 148);
pub const DIRT_DARK: Rgb = Rgb(206, 194, 120);
pub const PIPE_L: Rgb = Rgb(74, 122, 26);
pub const PIPE_M: Rgb = Rgb(100, 170, 40);
pub const PIPE_R: Rgb = Rgb(115, 191, 46);
pub const PIPE_HI: Rgb = Rgb(145, 215, 62);
pub const CAP_DARK: Rgb = Rgb(60, 100, 20);
pub const BIRD_Y: Rgb = Rgb(245, 200, 66);
pub const BIRD_HI: Rgb = Rgb(255, 225, 100);
pub const BIRD_WING: Rgb = Rgb(215, 165, 35);
pub const BIRD_WING_HI: Rgb = Rgb(250, 240, 210);
pub const BIRD_EYE: Rgb = Rgb(255, 255, 255);
pub const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
pub const BIRD_BEAK: Rgb = Rgb(225, 75, 35);
pub const BIRD_BEAK_HI: Rgb = Rgb(240, 110, 50);
pub const PANEL: Rgb = Rgb(222, 216, 148);
pub const PANEL_EDGE: Rgb = Rgb(84, 56, 71);
pub const BUTTON: Rgb = Rgb(232, 97, 1);
pub const BUTTON_HI: Rgb = Rgb(252, 160, 72);
pub const TITLE: Rgb = Rgb(252, 160, 72);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const SHADOW: Rgb = Rgb(30, 30, 30);
