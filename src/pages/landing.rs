use yew::prelude::*;

use crate::components::booking::BookingSection;
use crate::components::counter::AnimatedCounter;
use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::nav::anchor_callback;
use crate::components::reveal::use_scroll_reveal;
use crate::state::lightbox::GalleryImage;

fn gallery_images() -> Vec<GalleryImage> {
    [
        ("villa.jpg", "Die Retreat-Villa in den Hügeln von Paphos"),
        ("sunrise-yoga.jpg", "Yoga bei Sonnenaufgang auf der Terrasse"),
        ("coast.jpg", "Die Küste bei Aphrodite's Rock"),
        ("circle.jpg", "Gesprächskreis am Abend"),
        ("pool.jpg", "Pool mit Blick aufs Meer"),
        ("dinner.jpg", "Gemeinsames Abendessen unter Olivenbäumen"),
    ]
    .into_iter()
    .map(|(file, alt)| GalleryImage {
        src: format!("/assets/retreat/{}", file),
        alt: alt.to_string(),
    })
    .collect()
}

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Brauche ich Vorerfahrung mit Yoga oder Meditation?",
            answer: "Nein. Alle Einheiten sind für Einsteiger gedacht, erfahrene Teilnehmer finden trotzdem genug Tiefe.",
        },
        FaqEntry {
            question: "Was ist im Preis enthalten?",
            answer: "Drei Übernachtungen im Einzel- oder Doppelzimmer, Vollpension, alle Workshops und der Transfer vom Flughafen Paphos.",
        },
        FaqEntry {
            question: "Wie komme ich nach Zypern?",
            answer: "Paphos und Larnaka werden von vielen deutschen Flughäfen direkt angeflogen. Wir holen dich in Paphos ab.",
        },
        FaqEntry {
            question: "Kann ich meine Anmeldung stornieren?",
            answer: "Bis 30 Tage vor Beginn erstatten wir den vollen Betrag, danach 50 Prozent.",
        },
        FaqEntry {
            question: "Wie viele Teilnehmer gibt es?",
            answer: "Die Gruppe ist auf 16 Personen begrenzt, damit jeder genug Raum bekommt.",
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_scroll_reveal();

    html! {
        <main class="landing-page">
            <Hero />

            <section id="about" class="intro-section">
                <h2>{"Ein Raum, um dich neu kennenzulernen"}</h2>
                <p>
                    {"Becoming YOU ist ein Retreat für Menschen, die zwischen Job, Familie und Erwartungen den Kontakt zu sich selbst verloren haben. Vier Tage am Meer, ohne Leistungsdruck, mit viel Zeit für Stille, Bewegung und ehrliche Gespräche."}
                </p>
                <div class="stats">
                    <div class="stat"><AnimatedCounter target={4} /><span>{"Tage"}</span></div>
                    <div class="stat"><AnimatedCounter target={16} /><span>{"Plätze"}</span></div>
                    <div class="stat"><AnimatedCounter target={12} /><span>{"Workshops"}</span></div>
                </div>
            </section>

            <section class="vision-section">
                <div class="vision-point">
                    <h3>{"Ankommen"}</h3>
                    <p>{"Abschalten vom Alltag und bewusst im Moment landen."}</p>
                </div>
                <div class="vision-point">
                    <h3>{"Erkennen"}</h3>
                    <p>{"Verstehen, was dich antreibt und was dich bremst."}</p>
                </div>
                <div class="vision-point">
                    <h3>{"Wachsen"}</h3>
                    <p>{"Klare nächste Schritte für dein Leben nach dem Retreat."}</p>
                </div>
            </section>

            <section id="program" class="program-section">
                <h2>{"Programm"}</h2>
                <div class="program-grid">
                    <div class="program-card">
                        <h3>{"Tag 1 · Ankommen"}</h3>
                        <p>{"Anreise, Willkommenskreis und Sonnenuntergang am Strand."}</p>
                    </div>
                    <div class="program-card">
                        <h3>{"Tag 2 · Loslassen"}</h3>
                        <p>{"Morgenyoga, Atemarbeit und Workshop zu inneren Glaubenssätzen."}</p>
                    </div>
                    <div class="program-card">
                        <h3>{"Tag 3 · Neu ausrichten"}</h3>
                        <p>{"Werte-Arbeit, Wanderung und Journaling am Abend."}</p>
                    </div>
                    <div class="program-card">
                        <h3>{"Tag 4 · Mitnehmen"}</h3>
                        <p>{"Integration, Abschlusskreis und gemeinsames Mittagessen."}</p>
                    </div>
                </div>
            </section>

            <section id="gallery" class="gallery-section">
                <h2>{"Eindrücke"}</h2>
                <Gallery images={gallery_images()} />
            </section>

            <section class="testimonial-section">
                <div class="testimonial-content">
                    <blockquote>
                        {"\"Ich bin mit vielen Fragen angereist und mit einem klaren Gefühl für mich selbst nach Hause gefahren.\""}
                    </blockquote>
                    <cite>{"Julia, Teilnehmerin 2025"}</cite>
                </div>
            </section>

            <section id="faq" class="faq-section">
                <h2>{"Häufige Fragen"}</h2>
                <FaqAccordion entries={faq_entries()} />
            </section>

            <section id="booking" class="booking-section">
                <h2>{"Anmeldung"}</h2>
                <p>{"Sichere dir deinen Platz. Wir melden uns mit allen Details zur Zahlung und Anreise."}</p>
                <BookingSection />
            </section>

            <footer class="footer">
                <p>{"© 2026 Becoming YOU Retreat"}</p>
                <a href="#home" onclick={anchor_callback("#home")}>{"Nach oben"}</a>
            </footer>
        </main>
    }
}
