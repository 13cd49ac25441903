//! Home Page
//!
//! The single landing page. Owns the one `FilterState` signal; every pill,
//! search keystroke or sort change replaces it and the tutor list memo
//! recomputes from scratch.

use leptos::prelude::*;
use tutor_directory::{
    Catalog, CatalogSource, Choice, DeliveryMode, EmbeddedCatalog, FilterState, InstitutionType, SortKey,
    Subject, SubjectFilter,
};

use crate::api;
use crate::components::{FilterPill, Footer, Header, Hero, SectionHeading, SubjectPill, TutorCard};
use crate::content::{EMPTY_STATE, FAQS, OFFERS, STEPS};

const ALL_LABEL: &str = "الكل";

fn choice_label<T>(choice: &Choice<T>, label: fn(&T) -> &'static str) -> &'static str {
    match choice {
        Choice::All => ALL_LABEL,
        Choice::Only(value) => label(value),
    }
}

/// Catalog shown before the fetch completes. An empty list if the
/// built-in records fail validation.
fn initial_catalog() -> Catalog {
    EmbeddedCatalog::new().load().unwrap_or_else(|e| {
        leptos::logging::error!("Embedded tutor catalog rejected: {}", e);
        Catalog::default()
    })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (catalog, set_catalog) = signal(initial_catalog());
    let (filters, set_filters) = signal(FilterState::default());

    let tutors = Memo::new(move |_| {
        let filters = filters.get();
        catalog.with(|catalog| catalog.view(&filters))
    });

    // One fetch at startup; the embedded catalog stays if it fails
    leptos::task::spawn_local(async move {
        match api::fetch_catalog().await {
            Ok(remote) => set_catalog.set(remote),
            Err(e) => leptos::logging::warn!("Using embedded tutor catalog: {}", e),
        }
    });

    let subject_pill = move |subject: SubjectFilter, icon: &'static str| {
        view! {
            <SubjectPill
                label=subject.label()
                icon=icon
                active=Signal::derive(move || filters.with(|f| f.subject == subject))
                on_select=Callback::new(move |_| set_filters.update(|f| *f = f.with_subject(subject)))
            />
        }
    };

    let mode_pill = move |mode: Choice<DeliveryMode>| {
        view! {
            <FilterPill
                label=choice_label(&mode, DeliveryMode::label)
                active=Signal::derive(move || filters.with(|f| f.delivery_mode == mode))
                on_select=Callback::new(move |_| set_filters.update(|f| *f = f.with_delivery_mode(mode)))
            />
        }
    };

    let school_pill = move |school: Choice<InstitutionType>| {
        view! {
            <FilterPill
                label=choice_label(&school, InstitutionType::label)
                active=Signal::derive(move || filters.with(|f| f.institution_type == school))
                on_select=Callback::new(move |_| set_filters.update(|f| *f = f.with_institution_type(school)))
            />
        }
    };

    let heading = move || {
        filters.with(|f| match f.subject {
            SubjectFilter::All => "أفضل المعلمين".to_string(),
            subject => format!("المعلمون — {}", subject.label()),
        })
    };

    view! {
        <div class="page">
            <Header />

            <main>
                <Hero />

                <section id="subjects" class="section subjects">
                    <SectionHeading
                        title="اختر المادة"
                        subtitle="انقر على المادة لعرض المعلمين المتوفرين فوراً."
                    />

                    <div class="subject-grid">
                        {subject_pill(SubjectFilter::All, "✨")}
                        {Subject::ALL
                            .into_iter()
                            .map(|s| subject_pill(SubjectFilter::Only(s), s.icon()))
                            .collect_view()}
                    </div>

                    <div class="pill-row">
                        {std::iter::once(Choice::All)
                            .chain(DeliveryMode::ALL.map(Choice::Only))
                            .map(mode_pill)
                            .collect_view()}
                        <div class="pill-caption">"نوع الجلسة:"</div>
                    </div>

                    <div class="pill-row">
                        {std::iter::once(Choice::All)
                            .chain(InstitutionType::ALL.map(Choice::Only))
                            .map(school_pill)
                            .collect_view()}
                        <div class="pill-caption">"نوع المدرسة:"</div>
                    </div>
                </section>

                <section id="teachers" class="section teachers">
                    <div class="teachers-header">
                        <div>
                            <h2>{heading}</h2>
                            <p>"قارن، اختَر، واحجز درسًا تجريبيًا مجانيًا."</p>
                        </div>

                        <div class="controls">
                            <input
                                type="search"
                                placeholder="ابحث بالاسم أو الوسم أو الامتحان..."
                                aria-label="بحث المعلمين"
                                prop:value=move || filters.with(|f| f.search_query.clone())
                                on:input=move |ev| {
                                    let query = event_target_value(&ev);
                                    set_filters.update(|f| *f = f.with_search_query(query));
                                }
                            />

                            <select
                                aria-label="ترتيب النتائج"
                                on:change=move |ev| {
                                    match event_target_value(&ev).parse::<SortKey>() {
                                        Ok(key) => set_filters.update(|f| *f = f.with_sort_key(key)),
                                        Err(e) => leptos::logging::warn!("{}", e),
                                    }
                                }
                            >
                                {SortKey::ALL
                                    .into_iter()
                                    .map(|key| {
                                        view! {
                                            <option
                                                value=key.as_str()
                                                selected=move || filters.with(|f| f.sort_key == key)
                                            >
                                                {key.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>

                            <button class="btn btn-accent" on:click=move |_| api::open_booking(None)>
                                "احجز عبر واتساب"
                            </button>
                        </div>
                    </div>

                    <div class="tutor-grid">
                        <For
                            each=move || tutors.get()
                            key=|tutor| tutor.id
                            children=move |tutor| view! { <TutorCard tutor=tutor /> }
                        />
                        <Show when=move || tutors.with(Vec::is_empty)>
                            <div class="empty-state">{EMPTY_STATE}</div>
                        </Show>
                    </div>
                </section>

                <section id="offers" class="section offers">
                    <div class="offers-header">
                        <SectionHeading title="ماذا نقدّم" subtitle="كل ما تحتاجه لتعلّم فعال ومريح." />
                        <a class="btn btn-primary" href=api::booking_url(None) target="_blank" rel="noopener noreferrer">
                            "احجز درسًا تجريبيًا"
                        </a>
                    </div>
                    <div class="offer-grid">
                        {OFFERS
                            .iter()
                            .enumerate()
                            .map(|(i, offer)| {
                                view! {
                                    <div class="offer">
                                        <div class="offer-number">{i + 1}</div>
                                        <h3>{offer.title}</h3>
                                        <p>{offer.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section id="how" class="section how">
                    <SectionHeading title="كيف تعمل المنصة" subtitle="خطوات بسيطة من اختيار المادة إلى بدء الدرس." />
                    <ol class="steps">
                        {STEPS
                            .iter()
                            .map(|step| {
                                view! {
                                    <li class="step">
                                        <div class="step-number">{step.number}</div>
                                        <h3>{step.title}</h3>
                                        <p>{step.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </section>

                <section id="faq" class="section faq">
                    <SectionHeading title="الأسئلة الشائعة" />
                    <div class="faq-list">
                        {FAQS
                            .iter()
                            .map(|item| {
                                view! {
                                    <details class="faq-item">
                                        <summary>{item.question}</summary>
                                        <p>{item.answer}</p>
                                    </details>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section id="cta" class="section cta">
                    <h2>"جرّب درسًا تجريبيًا مجانيًا"</h2>
                    <p>"شاركنا أهدافك وسنرشّح لك معلمين مناسبين خلال دقائق — بدون التزام."</p>
                    <div class="cta-actions">
                        <a href="#teachers" class="btn btn-primary">"تصفّح المعلمين"</a>
                        <a href="#subjects" class="btn">"اختر مادة"</a>
                    </div>
                </section>
            </main>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_catalog_is_embedded_records() {
        let catalog = initial_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.view(&FilterState::default())[0].id, 4);
    }
}
