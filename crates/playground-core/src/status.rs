//! Human-readable status: torque readout, balance label and interaction hints.

use crate::physics::Balance;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Korean,
    English,
}

/// Last meaningful interaction, shown in the hint line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
    CharacterCreated,
    DragStarted,
    SeatedOnSeesaw,
    SeatedOnSwing,
    SwingPushed,
    DroppedToGround,
}

impl Hint {
    pub fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Hint::CharacterCreated, Locale::Korean) => {
                "캐릭터 생성됨. 시소/그네에 드래그하고, 그네는 클릭해서 밀 수 있습니다."
            }
            (Hint::CharacterCreated, Locale::English) => {
                "Character created. Drag it onto the seesaw or swing; click the swing to push it."
            }
            (Hint::DragStarted, Locale::Korean) => "시소 또는 그네 위에 드롭하면 탑승합니다.",
            (Hint::DragStarted, Locale::English) => "Drop onto the seesaw or the swing to ride.",
            (Hint::SeatedOnSeesaw, Locale::Korean) => "탑승 완료",
            (Hint::SeatedOnSeesaw, Locale::English) => "Seated on the seesaw",
            (Hint::SeatedOnSwing, Locale::Korean) => "그네 탑승 완료",
            (Hint::SeatedOnSwing, Locale::English) => "Seated on the swing",
            (Hint::SwingPushed, Locale::Korean) => "그네를 밀었습니다.",
            (Hint::SwingPushed, Locale::English) => "Pushed the swing.",
            (Hint::DroppedToGround, Locale::Korean) => "바닥으로 이동",
            (Hint::DroppedToGround, Locale::English) => "Moved to the ground",
        }
    }
}

impl Balance {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Balance::Balanced, Locale::Korean) => "균형",
            (Balance::Balanced, Locale::English) => "balanced",
            (Balance::RightDown, Locale::Korean) => "오른쪽이 내려감",
            (Balance::RightDown, Locale::English) => "right side down",
            (Balance::LeftDown, Locale::Korean) => "왼쪽이 내려감",
            (Balance::LeftDown, Locale::English) => "left side down",
        }
    }
}

/// Per-tick seesaw readout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    pub torque: f32,
    pub balance: Balance,
}

impl Readout {
    pub fn torque_text(&self) -> String {
        // halves round toward positive infinity
        format!("{} kg·m", (self.torque + 0.5).floor() as i64)
    }

    pub fn balance_text(&self, locale: Locale) -> &'static str {
        self.balance.label(locale)
    }
}
