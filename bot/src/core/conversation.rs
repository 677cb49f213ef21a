//! Registration and measurement wizards as an explicit state machine
//!
//! Each user has one `SessionState`. `advance` is a pure transition: it
//! validates the answer, produces the replies to send and either re-enters
//! the same state (invalid input), moves to the next step, or returns to
//! `Idle` with a `Commit` describing what to persist. Nothing is written
//! before the commit.

use analytics::{Gender, UserProfile};
use shared::ReplyKeyboard;

use super::input::{parse_age, parse_or_keep, parse_positive};
use super::report::format_number;
use super::texts;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingGender,
    AwaitingAge {
        gender: Gender,
    },
    AwaitingHeight {
        gender: Gender,
        age: u32,
    },
    AwaitingWeight {
        gender: Gender,
        age: u32,
        height: f64,
    },
    MeasuringAge,
    MeasuringHeight {
        age: u32,
    },
    MeasuringWeight {
        age: u32,
        height: f64,
    },
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    fn is_measurement(&self) -> bool {
        matches!(
            self,
            SessionState::MeasuringAge
                | SessionState::MeasuringHeight { .. }
                | SessionState::MeasuringWeight { .. }
        )
    }
}

/// Data a finished wizard asks to persist
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    Register {
        gender: Gender,
        age: u32,
        height: f64,
        weight: f64,
    },
    Measure {
        age: u32,
        height: f64,
        weight: f64,
    },
}

/// Text reply with an optional keyboard
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: ReplyKeyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: SessionState,
    pub replies: Vec<Reply>,
    pub commit: Option<Commit>,
}

impl Transition {
    fn to(next: SessionState, replies: Vec<Reply>) -> Self {
        Self {
            next,
            replies,
            commit: None,
        }
    }

    fn commit(commit: Commit) -> Self {
        Self {
            next: SessionState::Idle,
            replies: Vec::new(),
            commit: Some(commit),
        }
    }
}

pub fn gender_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::row([Gender::MALE_BUTTON, Gender::FEMALE_BUTTON])
        .resized()
        .one_time()
}

pub fn main_menu_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::row([texts::MENU_PROFILE, texts::MENU_MEASURE, texts::MENU_TOP]).resized()
}

/// "Main menu" prompt carrying the three menu buttons
pub fn main_menu() -> Reply {
    Reply::with_keyboard(texts::MAIN_MENU, main_menu_keyboard())
}

fn keep_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::row([texts::KEEP_CURRENT]).one_time()
}

pub fn start_registration() -> Transition {
    Transition::to(
        SessionState::AwaitingGender,
        vec![
            Reply::text(texts::GREETING),
            Reply::with_keyboard(texts::GENDER_PROMPT, gender_keyboard()),
        ],
    )
}

pub fn start_measurement(profile: &UserProfile) -> Transition {
    Transition::to(
        SessionState::MeasuringAge,
        vec![
            Reply::text(format!(
                "Ваш поточний вік: {}. Якщо він не змінився, натисніть кнопку '{}', або введіть нове значення.",
                profile.age,
                texts::KEEP_CURRENT
            )),
            Reply::with_keyboard(texts::AGE_LABEL, keep_keyboard()),
        ],
    )
}

fn ask_height_update(profile: &UserProfile) -> Vec<Reply> {
    vec![
        Reply::text(format!(
            "Ваш поточний зріст: {} см. Якщо він не змінився, натисніть кнопку '{}', або введіть нове значення.",
            format_number(profile.height),
            texts::KEEP_CURRENT
        )),
        Reply::with_keyboard(texts::HEIGHT_LABEL, keep_keyboard()),
    ]
}

fn ask_weight_update(profile: &UserProfile) -> Vec<Reply> {
    vec![
        Reply::text(format!(
            "Ваша поточна вага: {} кг. Якщо вона не змінилась, натисніть кнопку '{}', або введіть нове значення.",
            format_number(profile.weight),
            texts::KEEP_CURRENT
        )),
        Reply::with_keyboard(texts::WEIGHT_LABEL, keep_keyboard()),
    ]
}

fn retry(state: SessionState, text: &str) -> Transition {
    Transition::to(state, vec![Reply::text(text)])
}

/// Feed one answer to the wizard in `state`.
///
/// `profile` is the stored profile of the user, required by the
/// measurement wizard to offer the current values.
pub fn advance(state: SessionState, input: &str, profile: Option<&UserProfile>) -> Transition {
    if state.is_measurement() && profile.is_none() {
        return Transition::to(SessionState::Idle, vec![Reply::text(texts::NOT_REGISTERED)]);
    }

    match state {
        SessionState::Idle => Transition::to(SessionState::Idle, Vec::new()),

        SessionState::AwaitingGender => match Gender::from_input(input) {
            Some(gender) => Transition::to(
                SessionState::AwaitingAge { gender },
                vec![Reply::text(texts::AGE_PROMPT)],
            ),
            None => Transition::to(
                SessionState::AwaitingGender,
                vec![Reply::with_keyboard(texts::GENDER_RETRY, gender_keyboard())],
            ),
        },

        SessionState::AwaitingAge { gender } => match parse_age(input) {
            Ok(age) => Transition::to(
                SessionState::AwaitingHeight { gender, age },
                vec![Reply::text(texts::HEIGHT_PROMPT)],
            ),
            Err(_) => retry(SessionState::AwaitingAge { gender }, texts::AGE_RETRY),
        },

        SessionState::AwaitingHeight { gender, age } => match parse_positive(input) {
            Ok(height) => Transition::to(
                SessionState::AwaitingWeight { gender, age, height },
                vec![Reply::text(texts::WEIGHT_PROMPT)],
            ),
            Err(_) => retry(SessionState::AwaitingHeight { gender, age }, texts::HEIGHT_RETRY),
        },

        SessionState::AwaitingWeight { gender, age, height } => match parse_positive(input) {
            Ok(weight) => Transition::commit(Commit::Register {
                gender,
                age,
                height,
                weight,
            }),
            Err(_) => retry(
                SessionState::AwaitingWeight { gender, age, height },
                texts::WEIGHT_RETRY,
            ),
        },

        SessionState::MeasuringAge => {
            let Some(profile) = profile else {
                return Transition::to(SessionState::Idle, Vec::new());
            };
            match parse_or_keep(input, parse_age) {
                Ok(answer) => Transition::to(
                    SessionState::MeasuringHeight {
                        age: answer.or_current(profile.age),
                    },
                    ask_height_update(profile),
                ),
                Err(_) => retry(SessionState::MeasuringAge, texts::AGE_RETRY),
            }
        }

        SessionState::MeasuringHeight { age } => {
            let Some(profile) = profile else {
                return Transition::to(SessionState::Idle, Vec::new());
            };
            match parse_or_keep(input, parse_positive) {
                Ok(answer) => Transition::to(
                    SessionState::MeasuringWeight {
                        age,
                        height: answer.or_current(profile.height),
                    },
                    ask_weight_update(profile),
                ),
                Err(_) => retry(SessionState::MeasuringHeight { age }, texts::HEIGHT_RETRY),
            }
        }

        SessionState::MeasuringWeight { age, height } => {
            let Some(profile) = profile else {
                return Transition::to(SessionState::Idle, Vec::new());
            };
            match parse_or_keep(input, parse_positive) {
                Ok(answer) => Transition::commit(Commit::Measure {
                    age,
                    height,
                    weight: answer.or_current(profile.weight),
                }),
                Err(_) => retry(SessionState::MeasuringWeight { age, height }, texts::WEIGHT_RETRY),
            }
        }
    }
}
