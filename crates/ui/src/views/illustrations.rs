use dioxus::prelude::*;
use lesson_core::model::GalleryArt;

/// Pick the built-in illustration for a gallery entry.
pub(crate) fn gallery_art(art: GalleryArt) -> Element {
    match art {
        GalleryArt::Railroad => rsx! {
            RailroadIllustration {}
        },
        GalleryArt::Ladder => rsx! {
            LadderIllustration {}
        },
        GalleryArt::Notebook => rsx! {
            NotebookIllustration {}
        },
        GalleryArt::ZebraCrossing => rsx! {
            ZebraIllustration {}
        },
    }
}

/// Top view of a railroad: two rails that never meet, tied by sleepers.
#[component]
fn RailroadIllustration() -> Element {
    rsx! {
        svg { class: "gallery-art", view_box: "0 0 400 300",
            rect { width: "400", height: "300", fill: "#86efac" }
            rect { x: "80", y: "0", width: "240", height: "300", fill: "#d6d3d1" }
            for y in [20, 80, 140, 200, 260] {
                rect { x: "80", y: "{y}", width: "240", height: "20", fill: "#78350f" }
            }
            line {
                x1: "140",
                y1: "0",
                x2: "140",
                y2: "300",
                stroke: "#525252",
                stroke_width: "12",
            }
            line {
                x1: "260",
                y1: "0",
                x2: "260",
                y2: "300",
                stroke: "#525252",
                stroke_width: "12",
            }
        }
    }
}

/// A ladder leaning on a wall; the rungs are the parallel pattern.
#[component]
fn LadderIllustration() -> Element {
    rsx! {
        svg { class: "gallery-art", view_box: "0 0 400 300",
            rect { width: "400", height: "300", fill: "#e0f2fe" }
            rect { x: "0", y: "250", width: "400", height: "50", fill: "#f0f9ff" }
            g { transform: "translate(140, 20)",
                rect {
                    x: "0",
                    y: "0",
                    width: "15",
                    height: "260",
                    rx: "5",
                    fill: "#f59e0b",
                    stroke: "#b45309",
                    stroke_width: "2",
                }
                rect {
                    x: "105",
                    y: "0",
                    width: "15",
                    height: "260",
                    rx: "5",
                    fill: "#f59e0b",
                    stroke: "#b45309",
                    stroke_width: "2",
                }
                for y in [40, 90, 140, 190, 240] {
                    rect {
                        x: "15",
                        y: "{y}",
                        width: "90",
                        height: "10",
                        rx: "2",
                        fill: "#fbbf24",
                        stroke: "#b45309",
                        stroke_width: "2",
                    }
                }
            }
        }
    }
}

/// Ruled notebook paper on a desk.
#[component]
fn NotebookIllustration() -> Element {
    rsx! {
        svg { class: "gallery-art", view_box: "0 0 400 300",
            rect { width: "400", height: "300", fill: "#e5e7eb" }
            g { transform: "translate(80, 20)",
                rect {
                    width: "240",
                    height: "260",
                    fill: "white",
                    stroke: "#d1d5db",
                    stroke_width: "1",
                    rx: "2",
                }
                line {
                    x1: "40",
                    y1: "0",
                    x2: "40",
                    y2: "260",
                    stroke: "#ef4444",
                    stroke_width: "1",
                    opacity: "0.5",
                }
                for y in (0..10).map(|i| 40 + i * 22) {
                    line {
                        x1: "0",
                        y1: "{y}",
                        x2: "240",
                        y2: "{y}",
                        stroke: "#3b82f6",
                        stroke_width: "1",
                        opacity: "0.6",
                    }
                }
                for y in [40, 130, 220] {
                    circle {
                        cx: "15",
                        cy: "{y}",
                        r: "6",
                        fill: "#e5e7eb",
                        stroke: "#d1d5db",
                    }
                }
            }
        }
    }
}

/// Zebra crossing seen at a slant; the stripes stay parallel.
#[component]
fn ZebraIllustration() -> Element {
    rsx! {
        svg { class: "gallery-art", view_box: "0 0 400 300",
            rect { width: "400", height: "300", fill: "#374151" }
            g { transform: "skewX(-20) translate(50, 0)",
                for y in [20, 70, 120, 170, 220, 270] {
                    rect {
                        x: "50",
                        y: "{y}",
                        width: "300",
                        height: "30",
                        fill: "white",
                        opacity: "0.9",
                    }
                }
            }
            rect { x: "0", y: "0", width: "40", height: "300", fill: "#10b981" }
            rect { x: "360", y: "0", width: "40", height: "300", fill: "#10b981" }
        }
    }
}
