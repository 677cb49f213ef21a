//! User-facing strings

pub const MENU_PROFILE: &str = "Мій профіль 👤";
pub const MENU_MEASURE: &str = "Внести заміри 📏";
pub const MENU_TOP: &str = "Найкращі результати 🏆";
pub const MAIN_MENU: &str = "Головне меню:";

pub const KEEP_CURRENT: &str = "Далі";

pub const GREETING: &str = "Привіт, наш улюблений ласун! 🍩😋\n\
Якщо ти готовий до змін і хочеш разом з нами досягти нових висот, я тут, щоб підтримати тебе на кожному кроці. 💪🚀\n\
Разом ми подолаємо зайві кілограми і зробимо цей шлях цікавим і результативним! 🌟🎉";
pub const GENDER_PROMPT: &str = "Щоб ми могли правильно розрахувати твій ІМТ (індекс маси тіла), \
будь ласка, вибери свою стать, натиснувши на відповідну кнопку нижче. 👇😊";
pub const GENDER_RETRY: &str = "Будь ласка, вибери стать, натиснувши на одну з кнопок нижче 👇";
pub const AGE_PROMPT: &str = "Введи будь ласка свій вік ✏️.\nОбіцяємо, це залишиться між нами! 😉";
pub const HEIGHT_PROMPT: &str = "Тепер введи свій зріст в сантиметрах ✏️.";
pub const WEIGHT_PROMPT: &str = "А тепер, наостанок, введи свою вагу в кілограмах ✏️.";
pub const REGISTERED: &str = "Вітаю на борту! 🚀\n\
Тепер ти офіційно в нашій команді супергероїв зі схуднення!\n\
Готовий до нових звершень? 😎";
pub const ALREADY_REGISTERED: &str = "Ти вже зареєстрований!";
pub const NOT_REGISTERED: &str = "Ти ще не зареєстрований. Будь ласка, почни з реєстрації.";

pub const AGE_RETRY: &str = "Будь ласка, введи вік в числовому форматі!";
pub const HEIGHT_RETRY: &str = "Будь ласка, введи зріст в числовому форматі!";
pub const WEIGHT_RETRY: &str = "Будь ласка, введи вагу в числовому форматі!";

pub const AGE_LABEL: &str = "Вік:";
pub const HEIGHT_LABEL: &str = "Зріст:";
pub const WEIGHT_LABEL: &str = "Вага:";
pub const MEASUREMENTS_SAVED: &str = "Дані збережені!";
pub const SAVE_FAILED: &str = "Не вдалося зберегти дані. Спробуй, будь ласка, ще раз пізніше.";

pub const RENAME_USAGE: &str =
    "Неправильний формат команди. Використовуйте команду у форматі: /ім'я Ваше нове ім'я.";
pub const RENAME_NOT_REGISTERED: &str = "Ви ще не зареєстровані. Будь ласка, спочатку зареєструйтесь.";

pub const TOP_HEADER: &str = "Найкращі результати за останній тиждень:";
pub const TOP_EMPTY: &str = "Немає достатньо даних для відображення найкращих результатів.";

pub const TRANSCRIPTION_FAILED: &str = "Не вдалось розпізнати повідомлення.";

pub const MINOR_DISCLAIMER: &str = "Оцінка BMI для дітей та підлітків може бути специфічною.";
pub const NO_DATA: &str = "Немає даних";
pub const NOT_ENOUGH_FOR_DIFFERENCE: &str = "Немає достатньо даних для обчислення різниці.";
