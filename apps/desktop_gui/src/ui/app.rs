//! App shell: product card grid, the three modal workflows, toasts, and
//! the settings window.

use std::time::{Duration, Instant};

use eframe::egui;

use catalog::{seed, Category, Field, Product, ProductId};
use editor_core::{Action, AppState, NoticeKind, Workflow};

use crate::ui::theme::{
    self, PersistedUiSettings, ThemePreset, ThemeSettings, UiReadabilitySettings,
    SETTINGS_STORAGE_KEY,
};
use crate::ui::widgets;

const TOAST_TTL: Duration = Duration::from_secs(4);
const CARD_MIN_WIDTH: f32 = 260.0;
const DESCRIPTION_PREVIEW_CHARS: usize = 60;

#[derive(Debug, Clone)]
struct Toast {
    kind: NoticeKind,
    message: String,
    raised_at: Instant,
}

pub struct CatalogGuiApp {
    state: AppState,
    categories: Vec<Category>,
    toasts: Vec<Toast>,
    theme: ThemeSettings,
    readability: UiReadabilitySettings,
    applied_theme: Option<ThemeSettings>,
    applied_readability: Option<UiReadabilitySettings>,
    settings_open: bool,
    last_change: Option<String>,
}

impl CatalogGuiApp {
    pub fn new(state: AppState, persisted_settings: Option<PersistedUiSettings>) -> Self {
        let (theme, readability) = persisted_settings.unwrap_or_default().into_runtime();
        Self {
            state,
            categories: seed::categories(),
            toasts: Vec::new(),
            theme,
            readability,
            applied_theme: None,
            applied_readability: None,
            settings_open: false,
            last_change: None,
        }
    }

    fn dispatch(&mut self, action: Action) {
        let transition = std::mem::take(&mut self.state).apply(action);
        self.state = transition.state;
        if let Some(notice) = transition.notice {
            self.last_change = Some(chrono::Local::now().format("%H:%M:%S").to_string());
            self.toasts.push(Toast {
                kind: notice.kind,
                message: notice.message,
                raised_at: Instant::now(),
            });
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme)
            && self.applied_readability == Some(self.readability)
        {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = theme::visuals_for_theme(self.theme);
        style.text_styles = theme::scaled_text_styles(self.readability.text_scale);

        if self.readability.compact_density {
            style.spacing.item_spacing = egui::vec2(6.0, 4.0);
            style.spacing.button_padding = egui::vec2(8.0, 5.0);
        } else {
            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
            style.spacing.button_padding = egui::vec2(10.0, 6.0);
        }
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
        self.applied_readability = Some(self.readability);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.window_fill)
                    .inner_margin(egui::Margin::symmetric(14, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Latest Products");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Settings").clicked() {
                            self.settings_open = !self.settings_open;
                        }
                        let build = egui::Button::new(
                            egui::RichText::new("Build a Product").color(egui::Color32::WHITE),
                        )
                        .fill(self.theme.accent_color);
                        if ui.add(build).clicked() {
                            actions.push(Action::OpenCreate);
                        }
                    });
                });
            });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(format!("{} products", self.state.catalog.len()));
                if let Some(at) = &self.last_change {
                    ui.separator();
                    ui.small(format!("last change {at}"));
                }
            });
        });
    }

    fn show_card_grid(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        if self.state.catalog.is_empty() {
            ui.add_space(48.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Your store is empty").strong().size(18.0));
                ui.label("Use \"Build a Product\" to add the first entry.");
            });
            return;
        }

        let columns = (ui.available_width() / CARD_MIN_WIDTH).floor().max(1.0) as usize;
        let indexed: Vec<(usize, &Product)> = self.state.catalog.iter().enumerate().collect();
        egui::ScrollArea::vertical()
            .auto_shrink(false)
            .show(ui, |ui| {
                for row in indexed.chunks(columns) {
                    ui.columns(columns, |cols| {
                        for ((index, product), col) in row.iter().zip(cols.iter_mut()) {
                            self.show_product_card(col, *index, product, actions);
                        }
                    });
                    ui.add_space(10.0);
                }
            });
    }

    fn show_product_card(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        product: &Product,
        actions: &mut Vec<Action>,
    ) {
        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .corner_radius(egui::CornerRadius::same(self.theme.panel_rounding))
            .inner_margin(egui::Margin::symmetric(10, 10))
            .show(ui, |ui| {
                // Stand-in for the product image: a band tinted by the first
                // color, with the category name across it.
                let band = product
                    .colors
                    .first()
                    .map(|tag| theme::swatch_color(tag))
                    .unwrap_or(ui.visuals().extreme_bg_color);
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), 84.0),
                    egui::Sense::hover(),
                );
                ui.painter().rect_filled(
                    rect,
                    egui::CornerRadius::same(6),
                    band.gamma_multiply(0.35),
                );
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &product.category.name,
                    egui::TextStyle::Heading.resolve(ui.style()),
                    ui.visuals().weak_text_color(),
                );

                ui.add_space(6.0);
                ui.label(egui::RichText::new(&product.title).strong().size(16.0));
                ui.label(widgets::truncated(
                    &product.description,
                    DESCRIPTION_PREVIEW_CHARS,
                ));

                ui.horizontal(|ui| {
                    if product.colors.is_empty() {
                        ui.small("Not available colors!");
                    } else {
                        for tag in product.colors.iter().take(6) {
                            let (dot, _) = ui.allocate_exact_size(
                                egui::vec2(14.0, 14.0),
                                egui::Sense::hover(),
                            );
                            ui.painter()
                                .circle_filled(dot.center(), 6.0, theme::swatch_color(tag));
                        }
                        if product.colors.len() > 6 {
                            ui.small(format!("+{}", product.colors.len() - 6));
                        }
                    }
                });

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(widgets::formatted_price(&product.price))
                            .strong()
                            .color(self.theme.accent_color),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(&product.category.name);
                    });
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Edit").clicked() {
                        actions.push(Action::OpenEdit { index });
                    }
                    let remove = egui::Button::new(
                        egui::RichText::new("Remove").color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(185, 28, 28));
                    if ui.add(remove).clicked() {
                        actions.push(Action::OpenDelete { index });
                    }
                });
            });
    }

    fn show_draft_fields(
        &self,
        ui: &mut egui::Ui,
        editing: bool,
        actions: &mut Vec<Action>,
    ) {
        let Some(draft) = self.state.active_draft() else {
            return;
        };
        for field in Field::ALL {
            let mut value = draft.field(field).to_string();
            let response = widgets::form_text_field(
                ui,
                field_salt(field, editing),
                field.label(),
                &mut value,
                self.state.errors.get(field),
            );
            if response.changed() {
                actions.push(Action::FieldChanged { field, value });
            }
        }
    }

    fn show_category_picker(
        &self,
        ui: &mut egui::Ui,
        salt: &'static str,
        selected: &Category,
        actions: &mut Vec<Action>,
    ) {
        ui.label(egui::RichText::new("Category").strong());
        egui::ComboBox::from_id_salt(salt)
            .selected_text(selected.name.clone())
            .width(ui.available_width().min(240.0))
            .show_ui(ui, |ui| {
                for category in &self.categories {
                    if ui
                        .selectable_label(category == selected, &category.name)
                        .clicked()
                    {
                        actions.push(Action::SelectCategory(category.clone()));
                    }
                }
            });
    }

    fn show_color_palette(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        let displayed = match self.state.workflow {
            Workflow::Edit { .. } => self.state.displayed_edit_colors(),
            _ => self.state.temp_colors.clone(),
        };
        ui.label(egui::RichText::new("Colors").strong());
        ui.horizontal_wrapped(|ui| {
            for tag in seed::COLOR_CHOICES {
                let selected = displayed.iter().any(|c| c == tag);
                if widgets::color_swatch(ui, tag, selected).clicked() {
                    actions.push(Action::ToggleColor(tag.to_string()));
                }
            }
        });
        if !displayed.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for tag in &displayed {
                    widgets::color_chip(ui, tag);
                }
            });
        }
    }

    fn show_submit_row(&self, ui: &mut egui::Ui, submit_label: &str, actions: &mut Vec<Action>) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let submit = egui::Button::new(
                egui::RichText::new(submit_label).color(egui::Color32::WHITE),
            )
            .fill(self.theme.accent_color);
            if ui.add(submit).clicked() {
                actions.push(Action::Submit);
            }
            if ui.button("Cancel").clicked() {
                actions.push(Action::Cancel);
            }
        });
    }

    fn show_create_window(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let mut open = true;
        egui::Window::new("Add a New Product")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .default_width(420.0)
            .open(&mut open)
            .show(ctx, |ui| {
                self.show_draft_fields(ui, false, actions);
                ui.add_space(4.0);
                self.show_category_picker(
                    ui,
                    "create_category",
                    &self.state.selected_category,
                    actions,
                );
                ui.add_space(4.0);
                self.show_color_palette(ui, actions);
                self.show_submit_row(ui, "Submit", actions);
            });
        if !open {
            actions.push(Action::Cancel);
        }
    }

    fn show_edit_window(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let mut open = true;
        egui::Window::new("Edit Product")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .default_width(420.0)
            .open(&mut open)
            .show(ctx, |ui| {
                self.show_draft_fields(ui, true, actions);
                ui.add_space(4.0);
                self.show_category_picker(
                    ui,
                    "edit_category",
                    &self.state.edit_draft.category,
                    actions,
                );
                ui.add_space(4.0);
                self.show_color_palette(ui, actions);
                self.show_submit_row(ui, "Update", actions);
            });
        if !open {
            actions.push(Action::Cancel);
        }
    }

    fn show_confirm_delete_window(
        &self,
        ctx: &egui::Context,
        id: ProductId,
        actions: &mut Vec<Action>,
    ) {
        let title = self
            .state
            .catalog
            .iter()
            .find(|product| product.id == id)
            .map(|product| product.title.clone());

        let mut open = true;
        egui::Window::new("Remove Product")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .default_width(380.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(
                        "Are you sure you want to remove this Product from your Store?",
                    )
                    .strong(),
                );
                if let Some(title) = &title {
                    ui.label(egui::RichText::new(title).italics());
                }
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(
                        "Deleting this product will remove it permanently from your \
                         inventory. Any associated data, sales history and other related \
                         information will also be deleted. Please make sure this is the \
                         intended action.",
                    )
                    .weak(),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let remove = egui::Button::new(
                        egui::RichText::new("Yes, remove").color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(185, 28, 28));
                    if ui.add(remove).clicked() {
                        actions.push(Action::Submit);
                    }
                    if ui.button("Cancel").clicked() {
                        actions.push(Action::Cancel);
                    }
                });
            });
        if !open {
            actions.push(Action::Cancel);
        }
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let mut settings_open = self.settings_open;
        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(false)
            .open(&mut settings_open)
            .show(ctx, |ui| {
                ui.label("Theme preset");
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.theme.preset.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::SlateDark,
                            ThemePreset::SlateDark.label(),
                        );
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::PaperLight,
                            ThemePreset::PaperLight.label(),
                        );
                    });

                ui.separator();
                ui.label("Accent color");
                ui.color_edit_button_srgba(&mut self.theme.accent_color);
                ui.add(
                    egui::Slider::new(&mut self.theme.panel_rounding, 0..=16)
                        .text("Panel rounding"),
                );

                ui.separator();
                ui.add(
                    egui::Slider::new(&mut self.readability.text_scale, 0.8..=1.4)
                        .text("Text scale")
                        .step_by(0.05),
                );
                ui.checkbox(&mut self.readability.compact_density, "Compact UI density");

                if ui.button("Reset all settings to defaults").clicked() {
                    self.theme = ThemeSettings::slate_default();
                    self.readability = UiReadabilitySettings::defaults();
                }
            });
        self.settings_open = settings_open;
    }

    fn show_toasts(&self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toast_stack"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let fill = match toast.kind {
                        NoticeKind::Deleted => egui::Color32::from_rgb(194, 52, 77),
                        NoticeKind::Added | NoticeKind::Updated => {
                            egui::Color32::from_rgb(22, 163, 74)
                        }
                    };
                    egui::Frame::new()
                        .fill(fill)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message)
                                    .color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
    }
}

fn field_salt(field: Field, editing: bool) -> &'static str {
    match (field, editing) {
        (Field::Title, false) => "create_title",
        (Field::Description, false) => "create_description",
        (Field::ImageUrl, false) => "create_image_url",
        (Field::Price, false) => "create_price",
        (Field::Title, true) => "edit_title",
        (Field::Description, true) => "edit_description",
        (Field::ImageUrl, true) => "edit_image_url",
        (Field::Price, true) => "edit_price",
    }
}

impl eframe::App for CatalogGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);
        self.toasts
            .retain(|toast| toast.raised_at.elapsed() < TOAST_TTL);

        let mut actions = Vec::new();
        self.show_top_bar(ctx, &mut actions);
        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_card_grid(ui, &mut actions);
        });

        match self.state.workflow {
            Workflow::Idle => {}
            Workflow::Create => self.show_create_window(ctx, &mut actions),
            Workflow::Edit { .. } => self.show_edit_window(ctx, &mut actions),
            Workflow::ConfirmDelete { id } => {
                self.show_confirm_delete_window(ctx, id, &mut actions)
            }
        }
        self.show_settings_window(ctx);
        self.show_toasts(ctx);

        for action in actions {
            self.dispatch(action);
        }

        if self.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedUiSettings::from_runtime(self.theme, self.readability);
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
