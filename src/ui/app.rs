use crate::model::{Applicability, MappingFile, PropertySet, ResolvedProperty};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    SetDetail,
    CategoryResolve,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Modes,
    Sets,
    Properties,
}

pub struct App {
    pub mapping: MappingFile,
    pub view: View,
    pub focus_panel: FocusPanel,
    pub selected_mode: usize, // 0 = "All", 1 = Instance, 2 = Type
    pub selected_set: usize,
    pub selected_property: usize,
    pub selected_category: usize,
    pub properties_scroll_offset: usize,
    pub detail_scroll_offset: usize,
    pub resolve_scroll_offset: usize,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(mapping: MappingFile) -> Self {
        Self {
            mapping,
            view: View::Dashboard,
            focus_panel: FocusPanel::Sets, // Start on Sets
            selected_mode: 0, // 0 = "All"
            selected_set: 0,
            selected_property: 0,
            selected_category: 0,
            properties_scroll_offset: 0,
            detail_scroll_offset: 0,
            resolve_scroll_offset: 0,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => super::dashboard::draw_dashboard(frame, self),
            View::SetDetail => super::dashboard::draw_set_detail(frame, self),
            View::CategoryResolve => super::dashboard::draw_category_resolve(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.view {
                View::Dashboard => self.handle_dashboard_keys(key.code),
                View::SetDetail => self.handle_detail_keys(key.code),
                View::CategoryResolve => self.handle_resolve_keys(key.code),
            }
        }
        Ok(())
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.navigate_left(),
            KeyCode::Right | KeyCode::Char('l') => self.navigate_right(),
            KeyCode::Enter => self.enter_set_detail(),
            _ => {}
        }
    }

    fn handle_detail_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.view = View::Dashboard;
                self.detail_scroll_offset = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_detail_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_detail_down(),
            KeyCode::Left | KeyCode::Char('h') => self.previous_category_in_detail(),
            KeyCode::Right | KeyCode::Char('l') => self.next_category_in_detail(),
            KeyCode::Enter => self.enter_category_resolve(),
            _ => {}
        }
    }

    fn handle_resolve_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => {
                // Return to Set Detail, keeping selected_category
                self.view = View::SetDetail;
                self.resolve_scroll_offset = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_resolve_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_resolve_down(),
            _ => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Modes => self.previous_mode(),
            FocusPanel::Sets => self.previous_set(),
            FocusPanel::Properties => self.previous_property(),
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Modes => self.next_mode(),
            FocusPanel::Sets => self.next_set(),
            FocusPanel::Properties => self.next_property(),
        }
    }

    fn navigate_left(&mut self) {
        match self.focus_panel {
            FocusPanel::Properties => self.focus_panel = FocusPanel::Sets,
            FocusPanel::Sets => self.focus_panel = FocusPanel::Modes,
            FocusPanel::Modes => {}
        }
    }

    fn navigate_right(&mut self) {
        match self.focus_panel {
            FocusPanel::Modes => self.focus_panel = FocusPanel::Sets,
            FocusPanel::Sets => self.focus_panel = FocusPanel::Properties,
            FocusPanel::Properties => {}
        }
    }

    fn previous_mode(&mut self) {
        if self.selected_mode > 0 {
            self.selected_mode -= 1;
            self.selected_set = 0;
            self.selected_property = 0;
            self.properties_scroll_offset = 0;
        }
    }

    fn next_mode(&mut self) {
        // 0 = "All", 1 = Instance, 2 = Type
        if self.selected_mode < 2 {
            self.selected_mode += 1;
            self.selected_set = 0;
            self.selected_property = 0;
            self.properties_scroll_offset = 0;
        }
    }

    fn previous_set(&mut self) {
        if self.selected_set > 0 {
            self.selected_set -= 1;
            self.selected_property = 0;
            self.properties_scroll_offset = 0;
        }
    }

    fn next_set(&mut self) {
        if self.selected_set < self.get_filtered_sets().len().saturating_sub(1) {
            self.selected_set += 1;
            self.selected_property = 0;
            self.properties_scroll_offset = 0;
        }
    }

    fn previous_property(&mut self) {
        if self.selected_property > 0 {
            self.selected_property -= 1;
            if self.selected_property < self.properties_scroll_offset {
                self.properties_scroll_offset = self.selected_property;
            }
        }
    }

    fn next_property(&mut self) {
        let count = self.get_selected_set().map_or(0, |s| s.properties.len());
        if self.selected_property < count.saturating_sub(1) {
            self.selected_property += 1;
        }
    }

    fn enter_set_detail(&mut self) {
        // Only enter detail when focus is on the Sets panel
        if self.focus_panel == FocusPanel::Sets && self.get_selected_set().is_some() {
            self.view = View::SetDetail;
            self.detail_scroll_offset = 0;
            self.selected_category = 0;
        }
        // Enter on Modes does nothing (filtering happens via selected_mode)
    }

    fn enter_category_resolve(&mut self) {
        let category_count = self.get_selected_set().map_or(0, |s| s.categories.len());

        if category_count > 0 {
            self.view = View::CategoryResolve;
            // Keep selected_category from Set Detail navigation
            if self.selected_category >= category_count {
                self.selected_category = 0;
            }
            self.resolve_scroll_offset = 0;
        }
    }

    fn scroll_detail_up(&mut self) {
        if self.detail_scroll_offset > 0 {
            self.detail_scroll_offset -= 1;
        }
    }

    fn scroll_detail_down(&mut self) {
        let max = self
            .get_selected_set()
            .map_or(0, |s| s.properties.len())
            .saturating_sub(1);
        if self.detail_scroll_offset < max {
            self.detail_scroll_offset += 1;
        }
    }

    fn scroll_resolve_up(&mut self) {
        if self.resolve_scroll_offset > 0 {
            self.resolve_scroll_offset -= 1;
        }
    }

    fn scroll_resolve_down(&mut self) {
        let max = self.get_resolved().len().saturating_sub(1);
        if self.resolve_scroll_offset < max {
            self.resolve_scroll_offset += 1;
        }
    }

    /// Navigate to previous category in Set Detail view (wrap around)
    fn previous_category_in_detail(&mut self) {
        if let Some(set) = self.get_selected_set() {
            let count = set.categories.len();
            if count == 0 {
                return;
            }
            if self.selected_category > 0 {
                self.selected_category -= 1;
            } else {
                self.selected_category = count - 1;
            }
        }
    }

    /// Navigate to next category in Set Detail view (wrap around)
    fn next_category_in_detail(&mut self) {
        if let Some(set) = self.get_selected_set() {
            let count = set.categories.len();
            if count == 0 {
                return;
            }
            if self.selected_category < count - 1 {
                self.selected_category += 1;
            } else {
                self.selected_category = 0;
            }
        }
    }

    /// Applicability filter for the selected mode (None = "All")
    #[must_use]
    pub fn mode_filter(&self) -> Option<Applicability> {
        match self.selected_mode {
            1 => Some(Applicability::Instance),
            2 => Some(Applicability::Type),
            _ => None,
        }
    }

    /// Number of sets a mode row would show
    #[must_use]
    pub fn get_mode_count(&self, filter: Option<Applicability>) -> usize {
        self.mapping.sets_for(filter).len()
    }

    /// Get sets filtered by the selected mode
    #[must_use]
    pub fn get_filtered_sets(&self) -> Vec<&PropertySet> {
        self.mapping.sets_for(self.mode_filter())
    }

    #[must_use]
    pub fn get_selected_set(&self) -> Option<&PropertySet> {
        let filtered = self.get_filtered_sets();
        filtered.get(self.selected_set).copied()
    }

    /// Get the category highlighted in Set Detail
    #[must_use]
    pub fn get_selected_category(&self) -> Option<&str> {
        self.get_selected_set()
            .and_then(|s| s.categories.get(self.selected_category))
            .map(String::as_str)
    }

    /// Properties resolved for the highlighted category, across every set
    /// sharing the selected set's applicability
    #[must_use]
    pub fn get_resolved(&self) -> Vec<ResolvedProperty> {
        let set = match self.get_selected_set() {
            Some(s) => s,
            None => return Vec::new(),
        };
        let category = match set.categories.get(self.selected_category) {
            Some(c) => c,
            None => return Vec::new(),
        };

        self.mapping.resolve(category, set.applicability)
    }
}
