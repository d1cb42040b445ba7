//! The numbered menus shown by the shells.

/// A numbered menu. Items are shown in `ITEMS` order starting at 1.
pub trait Menu: Copy + 'static {
    const TITLE: &'static str;
    const ITEMS: &'static [Self];
    /// Picked when input runs out.
    const EXIT: Self;

    fn label(self) -> &'static str;

    /// Maps a typed answer such as `" 3 "` to its item.
    fn from_choice(raw: &str) -> Option<Self> {
        let n: usize = raw.trim().parse().ok()?;
        Self::ITEMS.get(n.checked_sub(1)?).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Admin,
    User,
    Exit,
}

impl Menu for Mode {
    const TITLE: &'static str = "Select Mode";
    const ITEMS: &'static [Self] = &[Mode::Admin, Mode::User, Mode::Exit];
    const EXIT: Self = Mode::Exit;

    fn label(self) -> &'static str {
        match self {
            Mode::Admin => "Admin mode",
            Mode::User => "User mode",
            Mode::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    AddPatient,
    DeletePatient,
    SearchPatient,
    AddDoctor,
    DeleteDoctor,
    ViewPatients,
    ViewAppointments,
    Exit,
}

impl Menu for AdminAction {
    const TITLE: &'static str = "Admin Mode";
    const ITEMS: &'static [Self] = &[
        AdminAction::AddPatient,
        AdminAction::DeletePatient,
        AdminAction::SearchPatient,
        AdminAction::AddDoctor,
        AdminAction::DeleteDoctor,
        AdminAction::ViewPatients,
        AdminAction::ViewAppointments,
        AdminAction::Exit,
    ];
    const EXIT: Self = AdminAction::Exit;

    fn label(self) -> &'static str {
        match self {
            AdminAction::AddPatient => "Add patient record",
            AdminAction::DeletePatient => "Delete patient record",
            AdminAction::SearchPatient => "Search patient by name",
            AdminAction::AddDoctor => "Add doctor profile",
            AdminAction::DeleteDoctor => "Delete Doctor profile",
            AdminAction::ViewPatients => "View patient records",
            AdminAction::ViewAppointments => "View appointments",
            AdminAction::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    ViewDoctors,
    SearchBySpeciality,
    CheckAvailability,
    BookAppointment,
    Exit,
}

impl Menu for UserAction {
    const TITLE: &'static str = "User Mode";
    const ITEMS: &'static [Self] = &[
        UserAction::ViewDoctors,
        UserAction::SearchBySpeciality,
        UserAction::CheckAvailability,
        UserAction::BookAppointment,
        UserAction::Exit,
    ];
    const EXIT: Self = UserAction::Exit;

    fn label(self) -> &'static str {
        match self {
            UserAction::ViewDoctors => "View doctor profiles",
            UserAction::SearchBySpeciality => "Search doctors by speciality",
            UserAction::CheckAvailability => "Check doctor availability",
            UserAction::BookAppointment => "Book appointments",
            UserAction::Exit => "Exit",
        }
    }
}
