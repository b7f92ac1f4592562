use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FigureCardProps {
    pub title: AttrValue,
    pub caption: AttrValue,
    pub src: AttrValue,
    pub on_open: Callback<()>,
}

#[function_component(FigureCard)]
pub fn figure_card(props: &FigureCardProps) -> Html {
    let open_cb = {
        let cb = props.on_open.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<figure onclick={open_cb} style="margin:0; background:#161b22; border:1px solid #30363d; border-radius:8px; overflow:hidden; cursor:zoom-in; display:flex; flex-direction:column;">
        <img src={props.src.clone()} alt={props.title.clone()} style="width:100%; aspect-ratio:16/10; object-fit:cover; background:#0e1116;" />
        <figcaption style="padding:10px 14px; display:flex; flex-direction:column; gap:4px;">
            <span style="font-size:16px; font-weight:600;">{ props.title.clone() }</span>
            <span style="font-size:12px; opacity:0.7;">{ props.caption.clone() }</span>
        </figcaption>
    </figure>}
}
