use crate::app::domain::Locale;
use crate::app::domain::views::NavLabels;

/// UI copy for one locale.
#[derive(Debug, Clone, Copy)]
pub struct ShellTexts {
    pub app_title: &'static str,
    pub settings: &'static str,
    pub theme: &'static str,
    pub languages: &'static str,
    pub about: &'static str,
    pub appearance: &'static str,
    pub choose_theme: &'static str,
    pub white_theme: &'static str,
    pub black_theme: &'static str,
    pub select_language: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub open_file_searcher: &'static str,
    pub select_files: &'static str,
    pub success: &'static str,
    pub file_selected: &'static str,
    pub canceled: &'static str,
    pub operation_canceled: &'static str,
    pub error: &'static str,
    pub error_selecting: &'static str,
    pub save_failed: &'static str,
    pub open_settings_failed: &'static str,
    pub about_title: &'static str,
    pub app_description: &'static str,
    pub version: &'static str,
    pub developed_by: &'static str,
}

impl ShellTexts {
    pub fn nav_labels(&self) -> NavLabels {
        NavLabels {
            settings: self.settings,
            open_file_searcher: self.open_file_searcher,
        }
    }
}

pub fn texts_for_locale(locale: Locale) -> ShellTexts {
    match locale {
        Locale::English => ShellTexts {
            app_title: "Nuvium",
            settings: "Settings",
            theme: "Theme",
            languages: "Languages",
            about: "About",
            appearance: "Appearance",
            choose_theme: "Choose theme",
            white_theme: "White",
            black_theme: "Black",
            select_language: "Select Language",
            save: "Save",
            cancel: "Cancel",
            open_file_searcher: "Open File Searcher",
            select_files: "Select files",
            success: "Success",
            file_selected: "File selected successfully",
            canceled: "Canceled",
            operation_canceled: "Operation canceled",
            error: "Error",
            error_selecting: "Error selecting file",
            save_failed: "Could not save settings",
            open_settings_failed: "Could not open the settings window",
            about_title: "About Nuvium",
            app_description: "A lightweight desktop shell.",
            version: "Version",
            developed_by: "Developed by",
        },
        Locale::Portuguese => ShellTexts {
            app_title: "Nuvium",
            settings: "Configurações",
            theme: "Tema",
            languages: "Idiomas",
            about: "Sobre",
            appearance: "Aparência",
            choose_theme: "Escolha o tema",
            white_theme: "Branco",
            black_theme: "Preto",
            select_language: "Selecione o idioma",
            save: "Salvar",
            cancel: "Cancelar",
            open_file_searcher: "Abrir buscador de arquivos",
            select_files: "Selecione arquivos",
            success: "Sucesso",
            file_selected: "Arquivo selecionado com sucesso",
            canceled: "Cancelado",
            operation_canceled: "Operação cancelada",
            error: "Erro",
            error_selecting: "Erro ao selecionar arquivo",
            save_failed: "Não foi possível salvar as configurações",
            open_settings_failed: "Não foi possível abrir a janela de configurações",
            about_title: "Sobre o Nuvium",
            app_description: "Um shell de desktop leve.",
            version: "Versão",
            developed_by: "Desenvolvido por",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_copy() {
        let texts = texts_for_locale(Locale::English);
        assert_eq!(texts.settings, "Settings");
        assert_eq!(texts.operation_canceled, "Operation canceled");
    }

    #[test]
    fn test_nav_labels_follow_locale() {
        let labels = texts_for_locale(Locale::Portuguese).nav_labels();
        assert_eq!(labels.settings, "Configurações");
        assert_eq!(labels.open_file_searcher, "Abrir buscador de arquivos");
    }

    #[test]
    fn test_portuguese_copy() {
        let texts = texts_for_locale(Locale::Portuguese);
        assert_eq!(texts.save, "Salvar");
        assert_eq!(texts.cancel, "Cancelar");
    }
}
