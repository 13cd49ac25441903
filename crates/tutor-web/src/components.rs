//! UI Components

use chrono::Datelike;
use leptos::prelude::*;
use tutor_directory::TutorRecord;
use tutor_directory::display::{initials, price_line, star_glyphs};

use crate::api;
use crate::content::{self, TRUSTED_BY};

#[component]
pub fn Logo() -> impl IntoView {
    view! { <span class="logo" aria-hidden="true">"م"</span> }
}

/// Sticky top bar with section anchors and the booking link
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="#top" class="brand">
                <Logo />
                <span>"يلا ندرس"</span>
            </a>
            <nav class="nav">
                <a href="#subjects">"المواد"</a>
                <a href="#teachers">"المعلمون"</a>
                <a href="#offers">"ما نقدّم"</a>
                <a href="#how">"كيف تعمل"</a>
                <a href="#faq">"الأسئلة"</a>
            </nav>
            <a class="btn btn-primary" href=api::booking_url(None) target="_blank" rel="noopener noreferrer">
                "احجز درسًا"
            </a>
        </header>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="hero" aria-labelledby="hero-title">
            <div class="hero-copy">
                <h1 id="hero-title">
                    "منصة تعليمية " <span class="primary">"مخصصة للمنطقة"</span>
                </h1>
                <p class="lead">
                    "قرّر مستوى التعلّم، قارِن المعلمين حسب التقييم والسعر، واحجز درسًا تجريبيًا دون التزام."
                </p>
                <div class="cta">
                    <a href="#teachers" class="btn btn-primary">"تصفّح المعلمين"</a>
                    <button class="btn" on:click=move |_| api::jump_to("subjects")>"اختر مادة"</button>
                </div>
                <div class="trusted-by">
                    {TRUSTED_BY
                        .into_iter()
                        .map(|brand| {
                            view! {
                                <div class="brand-chip" aria-label=format!("موثوق من {brand}")>{brand}</div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="hero-visual">
                <div class="board">
                    <div class="board-icon">"📘"</div>
                    <div>"لوحة دروس — جدول مرن"</div>
                </div>
                <div class="progress">
                    <div>"متابعة الأداء"</div>
                    <div class="on-track">"على المسار"</div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SectionHeading(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2>{title}</h2>
            {subtitle.map(|s| view! { <p>{s}</p> })}
        </div>
    }
}

/// Subject grid button
#[component]
pub fn SubjectPill(
    label: &'static str,
    icon: &'static str,
    #[prop(into)] active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || if active.get() { "subject-pill active" } else { "subject-pill" }
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_select.run(())
        >
            <span class="icon">{icon}</span>
            <span class="label">{label}</span>
        </button>
    }
}

/// Session mode / school type toggle
#[component]
pub fn FilterPill(
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || if active.get() { "pill active" } else { "pill" }
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_select.run(())
        >
            {label}
        </button>
    }
}

#[component]
pub fn Badge(#[prop(optional)] soft: bool, children: Children) -> impl IntoView {
    let class = if soft { "badge badge-soft" } else { "badge" };
    view! { <span class=class>{children()}</span> }
}

#[component]
pub fn StarRating(rating: f32) -> impl IntoView {
    view! {
        <span class="stars" aria-label=format!("{rating} من 5")>{star_glyphs(rating)}</span>
    }
}

/// Directory card for one tutor
#[component]
pub fn TutorCard(tutor: TutorRecord) -> impl IntoView {
    let avatar_class = format!("avatar {}", tutor.accent.as_deref().unwrap_or("accent-default"));
    let booking = api::booking_url(Some(&content::trial_request(&tutor.name)));
    let avatar = initials(&tutor.name);
    let price = price_line(&tutor);
    let reviews = format!("({})", tutor.review_count);
    let languages = tutor.languages.join(" · ");
    let mode = tutor.delivery_mode.label();
    let school = tutor.institution_type.label();

    let subjects = tutor
        .subjects
        .iter()
        .map(|subject| {
            let label = subject.label();
            view! { <Badge>{label}</Badge> }
        })
        .collect_view();
    let tags = tutor
        .tags
        .into_iter()
        .map(|tag| view! { <span class="tag">{tag}</span> })
        .collect_view();

    view! {
        <article class="tutor-card">
            <div class=avatar_class>{avatar}</div>
            <div class="tutor-body">
                <div class="title-row">
                    <h3>{tutor.name}</h3>
                    <div class="rating">
                        <StarRating rating=tutor.rating />
                        <span class="reviews">{reviews}</span>
                    </div>
                </div>
                <p class="description">{tutor.description}</p>
                <div class="badges">
                    {subjects}
                    <Badge soft=true>{languages}</Badge>
                    <Badge soft=true>{mode}</Badge>
                    <Badge soft=true>{school}</Badge>
                </div>
                <div class="tags">{tags}</div>
                <div class="card-footer">
                    <div class="price">{price}</div>
                    <a class="btn btn-primary" href=booking target="_blank" rel="noopener noreferrer">
                        "احجز درسًا تجريبيًا"
                    </a>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <a href="#top" class="brand">
                        <Logo />
                        <span>"يلا ندرس"</span>
                    </a>
                    <p>"نساعد الطلاب في العثور على المعلم المناسب منذ 2025."</p>
                </div>
                <div>
                    <h4>"استكشف"</h4>
                    <ul>
                        <li><a href="#subjects">"المواد"</a></li>
                        <li><a href="#teachers">"المعلمون"</a></li>
                        <li><a href="#offers">"ماذا نقدّم"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"الدعم"</h4>
                    <ul>
                        <li><a href="#faq">"الأسئلة"</a></li>
                        <li><a href="#cta">"اتصل بنا"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"قانوني"</h4>
                    <ul>
                        <li><a href="#">"الشروط"</a></li>
                        <li><a href="#">"الخصوصية"</a></li>
                    </ul>
                </div>
            </div>
            <div class="copyright">{format!("© {year} يلا ندرس. كل الحقوق محفوظة.")}</div>
        </footer>
    }
}
