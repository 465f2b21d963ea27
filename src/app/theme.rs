use std::convert::Infallible;

use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::theme::{ThemeFlag, ThemeFlagCodec, DARK_CLASS, DARK_MODE_KEY};

/// Storage read is delayed until hydration is done. The server can't see
/// local storage and always renders the light default, and class
/// attributes that differ during hydration are not patched. Reading the
/// stored flag afterwards turns it into an ordinary change that every
/// themed class list picks up.
fn storage_options() -> UseStorageOptions<ThemeFlag, Infallible, Infallible> {
    UseStorageOptions::default().delay_during_hydration(true)
}

/// Dark mode preference backed by local storage. Every change is written
/// back and mirrored as the `dark` class on `<html>`.
pub fn use_theme() -> (Signal<ThemeFlag>, WriteSignal<ThemeFlag>) {
    let (flag, set_flag, _) =
        use_local_storage_with_options::<ThemeFlag, ThemeFlagCodec>(DARK_MODE_KEY, storage_options());

    Effect::new(move |_| {
        let flag = flag.get();
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        let res = match flag.root_class() {
            Some(class) => classes.add_1(class),
            None => classes.remove_1(DARK_CLASS),
        };
        if res.is_err() {
            log::warn!("couldn't update root theme class");
        }
    });

    (flag, set_flag)
}
