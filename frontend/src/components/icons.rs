//! SVG 图标组件（lucide 风格的描边图标）
//!
//! 尺寸与颜色由调用方通过 `attr:class` 控制。

use leptos::prelude::*;

macro_rules! stroke_icon {
    ($name:ident, $($d:literal),+ $(,)?) => {
        #[component]
        pub fn $name() -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    $(<path d=$d />)+
                </svg>
            }
        }
    };
}

stroke_icon!(
    Heart,
    "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"
);
stroke_icon!(
    BookmarkPlus,
    "m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16Z",
    "M12 7v6",
    "M9 10h6"
);
stroke_icon!(
    Trash2,
    "M3 6h18",
    "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
    "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
    "M10 11v6",
    "M14 11v6"
);
stroke_icon!(
    Star,
    "M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.12 2.12 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.12 2.12 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.12 2.12 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.12 2.12 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.12 2.12 0 0 0 1.597-1.16Z"
);
stroke_icon!(
    Globe,
    "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20Z",
    "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
    "M2 12h20"
);
stroke_icon!(
    Lock,
    "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2Z",
    "M7 11V7a5 5 0 0 1 10 0v4"
);
stroke_icon!(
    Search,
    "m21 21-4.34-4.34",
    "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16Z"
);
stroke_icon!(
    LogOut,
    "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
    "m16 17 5-5-5-5",
    "M21 12H9"
);
stroke_icon!(
    Palette,
    "M12 22a10 10 0 1 1 10-10c0 1.8-1.4 3-3 3h-2.3a2.4 2.4 0 0 0-1.8 4c.5.6.3 1.6-.5 1.9-.76.1-1.56.1-2.4.1Z",
    "M7.5 10.5a1 1 0 1 0 0-2 1 1 0 0 0 0 2Z",
    "M12 7.5a1 1 0 1 0 0-2 1 1 0 0 0 0 2Z",
    "M16.5 10.5a1 1 0 1 0 0-2 1 1 0 0 0 0 2Z"
);
stroke_icon!(
    RefreshCw,
    "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8",
    "M21 3v5h-5",
    "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16",
    "M8 16H3v5"
);
stroke_icon!(
    Sun,
    "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10Z",
    "M12 1v2",
    "M12 21v2",
    "m4.22 4.22 1.42 1.42",
    "m18.36 18.36 1.42 1.42",
    "M1 12h2",
    "M21 12h2",
    "m4.22 19.78 1.42-1.42",
    "m18.36 5.64 1.42-1.42"
);
stroke_icon!(
    Moon,
    "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"
);
stroke_icon!(
    ShieldCheck,
    "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1Z",
    "m9 12 2 2 4-4"
);
stroke_icon!(
    UserRound,
    "M12 12a5 5 0 1 0 0-10 5 5 0 0 0 0 10Z",
    "M20 21a8 8 0 0 0-16 0"
);
stroke_icon!(
    Users,
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8Z",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75"
);
stroke_icon!(
    Pencil,
    "M21.174 6.812a1 1 0 0 0-3.986-3.987L3.842 16.174a2 2 0 0 0-.5.83l-1.321 4.352a.5.5 0 0 0 .623.622l4.353-1.32a2 2 0 0 0 .83-.497Z",
    "m15 5 4 4"
);
stroke_icon!(
    Flag,
    "M4 22V4a1 1 0 0 1 .4-.8A6 6 0 0 1 8 2c3 0 5 2 7.333 2q2 0 3.067-.8A1 1 0 0 1 20 4v10a1 1 0 0 1-.4.8A6 6 0 0 1 16 16c-3 0-5-2-7.333-2q-2 0-3.067.8"
);
stroke_icon!(
    Eye,
    "M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0",
    "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6Z"
);
stroke_icon!(
    EyeOff,
    "M10.733 5.076a10.744 10.744 0 0 1 11.205 6.575 1 1 0 0 1 0 .696 10.747 10.747 0 0 1-1.444 2.49",
    "M14.084 14.158a3 3 0 0 1-4.242-4.242",
    "M17.479 17.499a10.75 10.75 0 0 1-15.417-5.151 1 1 0 0 1 0-.696 10.75 10.75 0 0 1 4.446-5.143",
    "m2 2 20 20"
);
stroke_icon!(Plus, "M5 12h14", "M12 5v14");
stroke_icon!(
    Mail,
    "m22 7-8.991 5.727a2 2 0 0 1-2.009 0L2 7",
    "M2 5h20v14H2z"
);
stroke_icon!(
    ImageIcon,
    "M3 5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2Z",
    "M9 11a2 2 0 1 0 0-4 2 2 0 0 0 0 4Z",
    "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"
);
stroke_icon!(
    TriangleAlert,
    "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z",
    "M12 9v4",
    "M12 17h.01"
);
stroke_icon!(ChevronLeft, "m15 18-6-6 6-6");
stroke_icon!(ChevronRight, "m9 18 6-6-6-6");
stroke_icon!(
    TrendingUp,
    "M16 7h6v6",
    "m22 7-8.5 8.5-5-5L2 17"
);
stroke_icon!(
    LayoutDashboard,
    "M3 3h7v9H3z",
    "M14 3h7v5h-7z",
    "M14 12h7v9h-7z",
    "M3 16h7v5H3z"
);
