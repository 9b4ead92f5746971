use bugtrack_core::{
    ai, recent, BugCollectionView, BugDraft, BugRecord, BugStats, Config, Severity, SortKey,
    Status,
};
use eframe::egui;
use egui::{Color32, RichText};
use egui_extras::{Column, TableBuilder};

const RED: Color32 = Color32::from_rgb(248, 113, 113);
const ORANGE: Color32 = Color32::from_rgb(251, 146, 60);
const YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
const BLUE: Color32 = Color32::from_rgb(96, 165, 250);
const GREEN: Color32 = Color32::from_rgb(74, 222, 128);

fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Critical => RED,
        Severity::High => ORANGE,
        Severity::Medium => YELLOW,
        Severity::Low => BLUE,
    }
}

fn status_color(status: Status) -> Color32 {
    match status {
        Status::Open => RED,
        Status::InProgress => YELLOW,
        Status::Closed => GREEN,
    }
}

fn tag_chip(ui: &mut egui::Ui, tag: &str) {
    ui.label(
        RichText::new(tag)
            .small()
            .color(Color32::from_rgb(147, 197, 253))
            .background_color(Color32::from_rgb(30, 58, 138)),
    );
}

#[derive(Default, Debug, PartialEq, Clone, Copy)]
enum Page {
    #[default]
    Home,
    LogBug,
    Bugs,
    Detail(u32),
    Dashboard,
}

impl Page {
    fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::LogBug => "Log a Bug",
            Page::Bugs | Page::Detail(_) => "View Bugs",
            Page::Dashboard => "Dashboard",
        }
    }
}

/// Transient message shown under the navigation bar
struct Flash {
    text: String,
    is_error: bool,
}

pub struct BugTrackerApp {
    view: BugCollectionView,
    page: Page,
    team: Vec<String>,

    // Log-bug form state
    draft: BugDraft,

    // Detail page state
    comment_text: String,
    comment_author: String,
    show_ai_suggestions: bool,

    flash: Option<Flash>,
}

impl BugTrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, view: BugCollectionView, config: &Config) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_view(view, config)
    }

    fn with_view(view: BugCollectionView, config: &Config) -> Self {
        let team = config.team();
        let comment_author = team.first().cloned().unwrap_or_default();

        Self {
            view,
            page: Page::default(),
            team,
            draft: BugDraft::default(),
            comment_text: String::new(),
            comment_author,
            show_ai_suggestions: false,
            flash: None,
        }
    }

    /// Moves `bug` to `status` in the collection and in the copy being drawn
    fn change_status(&mut self, bug: &mut BugRecord, status: Status) {
        match self.view.set_status(bug.id, status) {
            Ok(()) => {
                bug.status = status;
                self.success(format!("Status changed to {}", status));
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn navigate(&mut self, page: Page) {
        if self.page != page {
            self.flash = None;
            self.show_ai_suggestions = false;
            self.comment_text.clear();
        }
        self.page = page;
    }

    fn success(&mut self, text: impl Into<String>) {
        self.flash = Some(Flash {
            text: text.into(),
            is_error: false,
        });
    }

    fn error(&mut self, text: impl Into<String>) {
        self.flash = Some(Flash {
            text: text.into(),
            is_error: true,
        });
    }

    fn show_navigation(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Label::new(RichText::new("Code Everest").heading().strong()).sense(egui::Sense::click()))
                    .clicked()
                {
                    self.navigate(Page::Home);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Laid out right to left, so listed in reverse
                    for target in [Page::Dashboard, Page::Bugs, Page::LogBug, Page::Home] {
                        let selected = self.page.nav_label() == target.nav_label();
                        if ui.selectable_label(selected, target.nav_label()).clicked() {
                            self.navigate(target);
                        }
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_flash(&mut self, ui: &mut egui::Ui) {
        let mut dismiss = false;
        if let Some(flash) = &self.flash {
            let color = if flash.is_error { RED } else { GREEN };
            ui.horizontal(|ui| {
                ui.colored_label(color, &flash.text);
                if ui.small_button("x").clicked() {
                    dismiss = true;
                }
            });
            ui.add_space(8.0);
        }
        if dismiss {
            self.flash = None;
        }
    }

    fn show_home(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(RichText::new("Code Everest Bug Tracker").size(32.0));
            ui.add_space(12.0);
            ui.label("Welcome! Use the buttons below for the basic operations.");
            ui.add_space(24.0);

            let mut target = None;
            ui.horizontal(|ui| {
                if ui.button("List Bugs").clicked() {
                    target = Some(Page::Bugs);
                }
                if ui.button("Log a Bug").clicked() {
                    target = Some(Page::LogBug);
                }
                if ui.button("Dashboard").clicked() {
                    target = Some(Page::Dashboard);
                }
            });
            if let Some(page) = target {
                self.navigate(page);
            }
        });
    }

    fn show_bug_list(&mut self, ui: &mut egui::Ui) {
        ui.heading("All Bugs");
        ui.label("View and manage all reported bugs.");
        ui.add_space(12.0);

        // Search and sort controls
        ui.horizontal(|ui| {
            let mut term = self.view.search_term().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut term)
                    .hint_text("Search bugs...")
                    .desired_width(320.0),
            );
            if response.changed() {
                self.view.set_search_term(term);
            }

            for key in SortKey::ALL {
                let active = self.view.active_sort() == Some(key);
                if ui.selectable_label(active, key.label()).clicked() {
                    self.view.apply_sort(key);
                }
            }
        });
        ui.add_space(12.0);

        let visible = self.view.visible_records();

        if visible.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("No bugs found");
                ui.label("Try adjusting your search criteria or log a new bug.");
            });
            return;
        }

        let mut open_bug = None;
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(280.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::remainder().at_least(160.0))
            .header(24.0, |mut header| {
                header.col(|ui| {
                    ui.strong("TITLE");
                });
                header.col(|ui| {
                    ui.strong("SEVERITY");
                });
                header.col(|ui| {
                    ui.strong("STATUS");
                });
                header.col(|ui| {
                    ui.strong("TAGS");
                });
            })
            .body(|mut body| {
                for bug in visible {
                    body.row(44.0, |mut row| {
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                if ui.link(RichText::new(&bug.title).strong()).clicked() {
                                    open_bug = Some(bug.id);
                                }
                                ui.small(format!("Assigned to {}", bug.assignee));
                            });
                        });
                        row.col(|ui| {
                            ui.colored_label(severity_color(bug.severity), bug.severity.to_string());
                        });
                        row.col(|ui| {
                            ui.colored_label(status_color(bug.status), bug.status.to_string());
                        });
                        row.col(|ui| {
                            for tag in &bug.tags {
                                tag_chip(ui, tag);
                            }
                        });
                    });
                }
            });

        if let Some(id) = open_bug {
            self.navigate(Page::Detail(id));
        }
    }

    fn show_bug_detail(&mut self, ui: &mut egui::Ui, id: u32) {
        if ui.link("<- Back to All Bugs").clicked() {
            self.navigate(Page::Bugs);
            return;
        }
        ui.add_space(8.0);

        let Some(mut bug) = self.view.get(id).cloned() else {
            ui.heading(format!("Bug #{} not found", id));
            return;
        };

        ui.heading(RichText::new(&bug.title).size(26.0));
        ui.horizontal(|ui| {
            ui.colored_label(severity_color(bug.severity), bug.severity.to_string());
            ui.colored_label(status_color(bug.status), bug.status.to_string());
            ui.label(format!("Created: {}", bug.created_at));
        });
        ui.horizontal_wrapped(|ui| {
            for tag in &bug.tags {
                tag_chip(ui, tag);
            }
        });
        ui.label(format!("Assigned to {}", bug.assignee));

        // Status controls
        let mut new_status = None;
        ui.horizontal(|ui| {
            ui.label("Status:");
            for status in Status::ALL {
                if ui
                    .selectable_label(bug.status == status, status.to_string())
                    .clicked()
                {
                    new_status = Some(status);
                }
            }
        });
        if let Some(status) = new_status.filter(|s| *s != bug.status) {
            self.change_status(&mut bug, status);
            // Header above was drawn with the old status
            ui.ctx().request_repaint();
        }

        ui.separator();
        ui.strong("Description");
        if bug.description.is_empty() {
            ui.weak("No description provided.");
        } else {
            ui.label(&bug.description);
        }

        ui.add_space(12.0);
        ui.group(|ui| {
            ui.strong("AI Summary");
            ui.label(format!("Placeholder summary: {}", ai::summary_placeholder()));
        });

        ui.add_space(12.0);
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong("AI Suggestions");
                let label = if self.show_ai_suggestions {
                    "Hide AI Suggestions"
                } else {
                    "Get AI Suggestions"
                };
                if ui.button(label).clicked() {
                    self.show_ai_suggestions = !self.show_ai_suggestions;
                }
            });
            if self.show_ai_suggestions {
                for suggestion in ai::suggestions_placeholder() {
                    ui.label(RichText::new(suggestion.title).strong());
                    ui.label(suggestion.body);
                    ui.add_space(4.0);
                }
            } else {
                ui.weak("Click the button to get AI-powered suggestions for resolving this bug.");
            }
        });

        ui.add_space(12.0);
        ui.strong(format!("Comments ({})", bug.comments.len()));
        for comment in &bug.comments {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(&comment.author);
                    ui.weak(comment.timestamp.format("%Y-%m-%d %H:%M").to_string());
                });
                ui.label(&comment.content);
            });
        }

        ui.add_space(8.0);
        ui.add(
            egui::TextEdit::multiline(&mut self.comment_text)
                .hint_text("Add a comment...")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        let mut submit = false;
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Author")
                .selected_text(self.comment_author.as_str())
                .show_ui(ui, |ui| {
                    for name in &self.team {
                        ui.selectable_value(&mut self.comment_author, name.clone(), name.as_str());
                    }
                });
            submit = ui.button("Add Comment").clicked();
        });
        if submit {
            let author = self.comment_author.clone();
            let text = self.comment_text.clone();
            match self.view.add_comment(id, &author, &text) {
                Ok(_) => {
                    self.comment_text.clear();
                    self.success("Comment added!");
                }
                Err(e) => self.error(e.to_string()),
            }
        }
    }

    fn show_log_bug(&mut self, ui: &mut egui::Ui) {
        ui.heading("Log a Bug");
        ui.label("Report a new bug to help improve our application.");
        ui.add_space(12.0);

        ui.label("Title");
        ui.add(
            egui::TextEdit::singleline(&mut self.draft.title)
                .hint_text("Enter a descriptive title")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        ui.label("Description");
        ui.add(
            egui::TextEdit::multiline(&mut self.draft.description)
                .hint_text("Describe the bug in detail. Include steps to reproduce if possible.")
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let severity_text = self
                .draft
                .severity
                .map(|s| s.to_string())
                .unwrap_or_else(|| "Select severity".to_string());
            egui::ComboBox::from_label("Severity")
                .selected_text(severity_text)
                .show_ui(ui, |ui| {
                    for severity in Severity::ALL {
                        ui.selectable_value(&mut self.draft.severity, Some(severity), severity.to_string());
                    }
                });

            ui.add_space(24.0);

            let assignee_text = self
                .draft
                .assignee
                .clone()
                .unwrap_or_else(|| "Select assignee".to_string());
            egui::ComboBox::from_label("Assignee")
                .selected_text(assignee_text)
                .show_ui(ui, |ui| {
                    for name in &self.team {
                        ui.selectable_value(&mut self.draft.assignee, Some(name.clone()), name.as_str());
                    }
                });
        });
        ui.add_space(16.0);

        if ui.button(RichText::new("Submit Bug").strong()).clicked() {
            match self.view.log_bug(&self.draft) {
                Ok(id) => {
                    self.draft.reset();
                    self.success(format!("Bug #{} logged successfully!", id));
                }
                Err(e) => self.error(e.to_string()),
            }
        }
    }

    fn show_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.heading("Dashboard");
        ui.label("Overview of bug tracking metrics and trends.");
        ui.add_space(12.0);

        let stats = BugStats::from_records(self.view.records());

        ui.horizontal_wrapped(|ui| {
            let cards = [
                ("Total Bugs", stats.total, Color32::WHITE),
                ("Open Bugs", stats.open, RED),
                ("In Progress", stats.in_progress, YELLOW),
                ("Closed Bugs", stats.closed, GREEN),
            ];
            for (title, value, color) in cards {
                ui.group(|ui| {
                    ui.set_min_width(160.0);
                    ui.vertical(|ui| {
                        ui.weak(title);
                        ui.label(RichText::new(value.to_string()).size(28.0).strong().color(color));
                    });
                });
            }
        });

        ui.add_space(16.0);
        ui.columns(2, |columns| {
            columns[0].strong("Bugs by Status");
            for status in Status::ALL {
                let count = match status {
                    Status::Open => stats.open,
                    Status::InProgress => stats.in_progress,
                    Status::Closed => stats.closed,
                };
                columns[0].colored_label(status_color(status), format!("{}: {}", status, count));
            }

            columns[1].strong("Bugs by Severity");
            for (severity, count) in &stats.by_severity {
                columns[1].colored_label(severity_color(*severity), format!("{}: {}", severity, count));
            }
        });

        ui.add_space(16.0);
        let mut open_bug = None;
        ui.columns(2, |columns| {
            columns[0].strong("Recent Bugs");
            for bug in recent(self.view.records(), 3) {
                columns[0].horizontal(|ui| {
                    if ui.link(&bug.title).clicked() {
                        open_bug = Some(bug.id);
                    }
                    ui.colored_label(severity_color(bug.severity), bug.severity.to_string());
                    ui.weak(bug.created_at.to_string());
                });
            }

            columns[1].strong("Team Performance");
            for member in &stats.team {
                columns[1].label(format!(
                    "{}  {}/{} resolved",
                    member.name, member.resolved, member.assigned
                ));
                columns[1].add(egui::ProgressBar::new(member.resolution_rate()).desired_width(240.0));
            }
        });

        if let Some(id) = open_bug {
            self.navigate(Page::Detail(id));
        }
    }
}

impl eframe::App for BugTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_navigation(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_flash(ui);

            match self.page {
                // The table scrolls on its own
                Page::Bugs => self.show_bug_list(ui),
                page => {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| match page {
                            Page::Home => self.show_home(ui),
                            Page::LogBug => self.show_log_bug(ui),
                            Page::Detail(id) => self.show_bug_detail(ui, id),
                            Page::Dashboard => self.show_dashboard(ui),
                            Page::Bugs => {}
                        });
                }
            }
        });
    }
}
