//! Interface copy: headings, labels, buttons and messages.

use super::{Locale, Text};

/// A fixed piece of interface text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phrase {
    NavHome,
    NavPortfolio,
    NavAbout,
    NavServices,
    NavTestimonials,
    NavContact,
    LanguageToggle,

    HeroCta,

    PortfolioHeading,
    PortfolioSubheading,
    FilterAll,
    LightboxClose,

    AboutHeading,

    ServicesHeading,
    ServicesSubheading,
    BookService,
    ServicesCustomPrompt,
    ContactMe,

    TestimonialsHeading,
    TestimonialsSubheading,

    ContactHeading,
    ContactSubheading,
    ContactInfoHeading,
    FollowSocial,
    SendMessageHeading,
    FieldName,
    FieldEmail,
    FieldPhone,
    FieldSubject,
    FieldMessage,
    PlaceholderName,
    PlaceholderEmail,
    PlaceholderPhone,
    PlaceholderMessage,
    SendButton,
    SendingButton,
    ThankYouTitle,
    ThankYouBody,
    ToastSentTitle,
    ToastSentBody,
    ToastSendFailed,
    ErrorNameRequired,
    ErrorEmailRequired,
    ErrorEmailInvalid,
    ErrorMessageRequired,
    ErrorFieldRequired,
    ErrorFieldInvalid,

    FooterTagline,
    FooterRights,

    NotFoundTitle,
    NotFoundBody,
    NotFoundReturn,

    SettingsReloaded,
    SettingsDeleted,
}

impl Phrase {
    pub fn text(self) -> Text {
        use Phrase::*;
        match self {
            NavHome => Text::new("Home", "Главная"),
            NavPortfolio => Text::new("Portfolio", "Портфолио"),
            NavAbout => Text::new("About", "Обо мне"),
            NavServices => Text::new("Services", "Услуги"),
            NavTestimonials => Text::new("Testimonials", "Отзывы"),
            NavContact => Text::new("Contact", "Контакты"),
            LanguageToggle => Text::new("RU", "EN"),

            HeroCta => Text::new("View Portfolio", "Смотреть портфолио"),

            PortfolioHeading => Text::new("Portfolio", "Портфолио"),
            PortfolioSubheading => Text::new(
                "Explore our diverse collection of photographic work",
                "Исследуйте нашу разнообразную коллекцию фотографических работ",
            ),
            FilterAll => Text::new("All", "Все"),
            LightboxClose => Text::new("Close", "Закрыть"),

            AboutHeading => Text::new("About Me", "Обо мне"),

            ServicesHeading => Text::new("My Services", "Мои услуги"),
            ServicesSubheading => Text::new(
                "Comprehensive photography services tailored to your unique needs",
                "Полный спектр фотоуслуг с учётом ваших уникальных потребностей",
            ),
            BookService => Text::new("Book This Service", "Заказать услугу"),
            ServicesCustomPrompt => Text::new(
                "Need something specific? Let's discuss your custom photography needs",
                "Нужно что-то особенное? Давайте обсудим вашу индивидуальную съёмку",
            ),
            ContactMe => Text::new("Contact Me", "Связаться со мной"),

            TestimonialsHeading => Text::new("What Clients Say", "Что говорят клиенты"),
            TestimonialsSubheading => Text::new(
                "Hear from people who have experienced my photography services",
                "Отзывы людей, которые уже воспользовались моими услугами",
            ),

            ContactHeading => Text::new("Get In Touch", "Связаться"),
            ContactSubheading => Text::new(
                "Have a project in mind or want to book a session? Send me a message and I'll get back to you as soon as possible.",
                "Есть идея проекта или хотите забронировать съёмку? Напишите мне, и я отвечу как можно скорее.",
            ),
            ContactInfoHeading => Text::new("Contact Information", "Контактная информация"),
            FollowSocial => Text::new("Follow me on social media", "Я в социальных сетях"),
            SendMessageHeading => Text::new("Send a Message", "Отправить сообщение"),
            FieldName => Text::new("Name", "Имя"),
            FieldEmail => Text::new("Email", "Эл. почта"),
            FieldPhone => Text::new("Phone Number", "Номер телефона"),
            FieldSubject => Text::new("Subject", "Тема"),
            FieldMessage => Text::new("Message", "Сообщение"),
            PlaceholderName => Text::new("Your name", "Ваше имя"),
            PlaceholderEmail => Text::new("Your email", "Ваша эл. почта"),
            PlaceholderPhone => Text::new("Your phone number", "Ваш номер телефона"),
            PlaceholderMessage => Text::new("Your message", "Ваше сообщение"),
            SendButton => Text::new("Send Message", "Отправить сообщение"),
            SendingButton => Text::new("Sending...", "Отправка..."),
            ThankYouTitle => Text::new("Thank You!", "Спасибо!"),
            ThankYouBody => Text::new(
                "Your message has been sent successfully.",
                "Ваше сообщение успешно отправлено.",
            ),
            ToastSentTitle => Text::new("Message sent!", "Сообщение отправлено!"),
            ToastSentBody => Text::new(
                "Thank you for your message. I'll get back to you soon.",
                "Спасибо за сообщение. Я скоро свяжусь с вами.",
            ),
            ToastSendFailed => Text::new(
                "Your message could not be sent. Please try again.",
                "Не удалось отправить сообщение. Попробуйте ещё раз.",
            ),
            ErrorNameRequired => Text::new("Name is required", "Укажите имя"),
            ErrorEmailRequired => Text::new("Email is required", "Укажите эл. почту"),
            ErrorEmailInvalid => Text::new("Email is invalid", "Некорректная эл. почта"),
            ErrorMessageRequired => Text::new("Message is required", "Введите сообщение"),
            ErrorFieldRequired => Text::new("This field is required", "Заполните это поле"),
            ErrorFieldInvalid => Text::new("This value is invalid", "Некорректное значение"),

            FooterTagline => Text::new(
                "Capturing moments that last a lifetime.",
                "Запечатлеваем моменты, которые останутся навсегда.",
            ),
            FooterRights => Text::new("All rights reserved.", "Все права защищены."),

            NotFoundTitle => Text::new("404", "404"),
            NotFoundBody => Text::new("Oops! Page not found", "Упс! Страница не найдена"),
            NotFoundReturn => Text::new("Return to Home", "Вернуться на главную"),

            SettingsReloaded => Text::new("Settings reloaded", "Настройки перезагружены"),
            SettingsDeleted => Text::new("Settings file deleted", "Файл настроек удалён"),
        }
    }

    #[inline]
    pub fn get(self, locale: Locale) -> &'static str {
        self.text().get(locale)
    }
}
